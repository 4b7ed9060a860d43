use chrono::Utc;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{category, entry};
use crate::error::Result;
use crate::models::category::{CategoryInput, validate_category};
use crate::models::entry::{EntryInput, validate_entry};

use super::{find, map_write_err, next_updated_at};

fn apply_category(model: &mut category::ActiveModel, input: CategoryInput) {
    model.active = Set(input.active);
    model.name = Set(input.name.trim().to_string());
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_category<C: ConnectionTrait>(
    db: &C,
    input: CategoryInput,
) -> Result<category::Model> {
    validate_category(&input)?;

    let now = Utc::now();
    let mut model = category::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_category(&mut model, input);

    model
        .insert(db)
        .await
        .map_err(|e| map_write_err(e, "Category"))
}

#[instrument(skip(db, input))]
pub async fn update_category<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: CategoryInput,
) -> Result<category::Model> {
    validate_category(&input)?;

    let existing = find::<category::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: category::ActiveModel = existing.into();
    apply_category(&mut model, input);
    model.updated_at = Set(stamp);

    model
        .update(db)
        .await
        .map_err(|e| map_write_err(e, "Category"))
}

fn apply_entry(model: &mut entry::ActiveModel, input: EntryInput) {
    model.active = Set(input.active);
    model.category_id = Set(input.category_id);
    model.name = Set(input.name.trim().to_string());
    model.author = Set(input.author);
    model.headline = Set(input.headline);
    model.description = Set(input.description);
    model.url = Set(input.url);
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_entry<C: ConnectionTrait>(db: &C, input: EntryInput) -> Result<entry::Model> {
    validate_entry(&input)?;

    let now = Utc::now();
    let mut model = entry::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_entry(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "Entry"))
}

#[instrument(skip(db, input))]
pub async fn update_entry<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: EntryInput,
) -> Result<entry::Model> {
    validate_entry(&input)?;

    let existing = find::<entry::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: entry::ActiveModel = existing.into();
    apply_entry(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "Entry"))
}
