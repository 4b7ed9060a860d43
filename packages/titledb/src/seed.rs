use chrono::Utc;
use sea_orm::*;
use tracing::info;

use crate::entity::group;
use crate::error::Result;
use crate::repository::find_group_by_name;

/// Groups the root ACL refers to; created on startup when missing.
pub const DEFAULT_GROUPS: &[&str] = &[group::EDITORS];

/// Seed the `groups` table with defaults. Returns the number inserted.
pub async fn seed_groups<C: ConnectionTrait>(db: &C) -> Result<u32> {
    let mut inserted = 0u32;
    for &name in DEFAULT_GROUPS {
        if find_group_by_name(db, name).await?.is_some() {
            continue;
        }

        let now = Utc::now();
        group::ActiveModel {
            active: Set(true),
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        inserted += 1;
    }

    if inserted > 0 {
        info!("Seeded {} new groups", inserted);
    }
    Ok(inserted)
}
