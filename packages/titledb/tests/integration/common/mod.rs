use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use titledb::config::DatabaseConfig;
use titledb::database::init_db;
use titledb::entity::{assets, category, entry, smdh, xml};
use titledb::models::arm9::Arm9Input;
use titledb::models::assets::AssetsInput;
use titledb::models::category::CategoryInput;
use titledb::models::cia::CiaInput;
use titledb::models::entry::EntryInput;
use titledb::models::smdh::SmdhInput;
use titledb::models::tdsx::TdsxInput;
use titledb::models::xml::XmlInput;
use titledb::repository;

/// A fresh in-memory catalog with every table synced.
pub async fn setup() -> DatabaseConnection {
    init_db(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to initialize in-memory database")
}

/// Wire-form file attributes for a package at `url`.
pub fn file_json(url: &str) -> Value {
    json!({
        "version": "1.0.0",
        "size": 4096,
        "mtime": "2016-05-01T12:00:00Z",
        "url": url,
        "path": null,
        "etag": "\"abc123\"",
        "sha256": "0f".repeat(32),
    })
}

/// Merges `extra` into the file attributes of `url`.
pub fn with_file(url: &str, extra: Value) -> Value {
    let mut value = file_json(url);
    if let (Some(target), Value::Object(fields)) = (value.as_object_mut(), extra) {
        target.extend(fields);
    }
    value
}

pub async fn create_category(db: &DatabaseConnection, name: &str) -> category::Model {
    let input: CategoryInput = serde_json::from_value(json!({ "name": name })).unwrap();
    repository::create_category(db, input)
        .await
        .expect("create category")
}

pub async fn create_entry(
    db: &DatabaseConnection,
    name: &str,
    category_id: Option<i32>,
) -> entry::Model {
    let input: EntryInput = serde_json::from_value(json!({
        "name": name,
        "category_id": category_id,
        "author": "smealum",
        "headline": "Launch homebrew",
        "description": "Loads 3dsx files from the SD card",
        "url": "https://github.com/example/launcher",
    }))
    .unwrap();
    repository::create_entry(db, input)
        .await
        .expect("create entry")
}

pub async fn create_assets(db: &DatabaseConnection) -> assets::Model {
    let input: AssetsInput = serde_json::from_value(with_file(
        "https://example.com/assets.zip",
        json!({ "mapping": r#"{"icon":"icons/app.png"}"# }),
    ))
    .unwrap();
    repository::create_assets(db, input)
        .await
        .expect("create assets")
}

pub async fn create_smdh(db: &DatabaseConnection) -> smdh::Model {
    let input: SmdhInput = serde_json::from_value(with_file(
        "https://example.com/app.smdh",
        json!({
            "name_s": "Launcher",
            "name_l": "Homebrew Launcher",
            "publisher": "smealum",
            "icon_s": "c21hbGw=",
            "icon_l": "bGFyZ2U=",
        }),
    ))
    .unwrap();
    repository::create_smdh(db, input).await.expect("create smdh")
}

pub async fn create_xml(db: &DatabaseConnection) -> xml::Model {
    let input: XmlInput =
        serde_json::from_value(file_json("https://example.com/app.xml")).unwrap();
    repository::create_xml(db, input).await.expect("create xml")
}

pub fn cia_input(entry_id: Option<i32>, assets_id: Option<i32>, url: &str) -> CiaInput {
    serde_json::from_value(with_file(
        url,
        json!({
            "entry_id": entry_id,
            "assets_id": assets_id,
            "titleid": "000400000F800100",
            "name_s": "Foo",
            "name_l": "Bar",
            "publisher": "Baz",
            "icon_s": "c21hbGw=",
            "icon_l": "bGFyZ2U=",
        }),
    ))
    .unwrap()
}

pub fn tdsx_input(
    entry_id: Option<i32>,
    smdh_id: Option<i32>,
    xml_id: Option<i32>,
    url: &str,
) -> TdsxInput {
    serde_json::from_value(with_file(
        url,
        json!({
            "entry_id": entry_id,
            "smdh_id": smdh_id,
            "xml_id": xml_id,
            "name": "boot",
        }),
    ))
    .unwrap()
}

pub fn arm9_input(entry_id: Option<i32>, assets_id: Option<i32>, url: &str) -> Arm9Input {
    serde_json::from_value(with_file(
        url,
        json!({ "entry_id": entry_id, "assets_id": assets_id }),
    ))
    .unwrap()
}

/// Keys of a JSON object in emission order.
pub fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|m| m.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
