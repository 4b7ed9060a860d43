use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use titledb::config::AppConfig;
use titledb::database::init_db;
use titledb::{render, seed, views};

#[derive(Parser)]
#[command(name = "titledb", version, about = "Title catalog maintenance")]
struct Cli {
    /// Config file path without extension.
    #[arg(long, env = "TITLEDB_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an entry with its active packages as JSON.
    Entry { id: i32 },
    /// Print every active CIA in the legacy projection.
    CiaV0,
    /// Print the view catalog as an OpenAPI document.
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load config")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log.max_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    views::validate_views().context("View catalog is inconsistent")?;

    if let Some(Commands::Schema) = cli.command {
        println!("{}", serde_json::to_string_pretty(&views::catalog_document()?)?);
        return Ok(());
    }

    let db = init_db(&config.database)
        .await
        .context("Failed to connect to database")?;
    seed::seed_groups(&db)
        .await
        .context("Failed to seed groups")?;

    match cli.command {
        Some(Commands::Entry { id }) => {
            let entry = render::load_entry_nested(&db, id)
                .await
                .with_context(|| format!("Failed to load entry {id}"))?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Some(Commands::CiaV0) => {
            let rows = render::list_cia_v0(&db).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Some(Commands::Schema) | None => info!("Catalog ready"),
    }

    Ok(())
}
