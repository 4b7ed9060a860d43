//! Supersede path used when a new version of a package is ingested.
//!
//! Inside one transaction, every active row of the same variant under the
//! same entry is marked inactive and the new row is inserted active. Rows
//! without an entry have no siblings and are simply inserted.

use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{arm9, cia, tdsx};
use crate::error::Result;
use crate::models::arm9::{Arm9Input, validate_arm9};
use crate::models::cia::{CiaInput, validate_cia};
use crate::models::tdsx::{TdsxInput, validate_tdsx};
use crate::repository::{
    CatalogEntity, active_children, insert_arm9, insert_cia, insert_tdsx, next_updated_at,
};

/// Marks every active row of `E` whose `entry_column` equals `entry_id`
/// inactive. Each retired row keeps a non-decreasing `updated_at`. Returns
/// the number of rows retired.
async fn retire_active<E, C>(db: &C, entry_column: E::Column, entry_id: Option<i32>) -> Result<u64>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    let Some(entry_id) = entry_id else {
        return Ok(0);
    };

    let siblings = active_children::<E, C>(db, entry_column, entry_id).await?;
    for row in &siblings {
        E::update_many()
            .col_expr(E::active_column(), Expr::value(false))
            .col_expr(
                E::updated_at_column(),
                Expr::value(next_updated_at(E::updated_at(row))),
            )
            .filter(E::id_column().eq(E::id(row)))
            .exec(db)
            .await?;
    }

    Ok(siblings.len() as u64)
}

#[instrument(skip(db, input), fields(titleid = %input.titleid, entry_id = ?input.entry_id))]
pub async fn supersede_cia(db: &DatabaseConnection, mut input: CiaInput) -> Result<cia::Model> {
    validate_cia(&input)?;
    input.active = true;

    let now = Utc::now();
    let txn = db.begin().await?;
    let retired =
        retire_active::<cia::Entity, _>(&txn, cia::Column::EntryId, input.entry_id).await?;
    let model = insert_cia(&txn, input, now).await?;
    txn.commit().await?;

    info!(id = model.id, retired, "CIA version ingested");
    Ok(model)
}

#[instrument(skip(db, input), fields(entry_id = ?input.entry_id))]
pub async fn supersede_tdsx(db: &DatabaseConnection, mut input: TdsxInput) -> Result<tdsx::Model> {
    validate_tdsx(&input)?;
    input.active = true;

    let now = Utc::now();
    let txn = db.begin().await?;
    let retired =
        retire_active::<tdsx::Entity, _>(&txn, tdsx::Column::EntryId, input.entry_id).await?;
    let model = insert_tdsx(&txn, input, now).await?;
    txn.commit().await?;

    info!(id = model.id, retired, "TDSX version ingested");
    Ok(model)
}

#[instrument(skip(db, input), fields(entry_id = ?input.entry_id))]
pub async fn supersede_arm9(db: &DatabaseConnection, mut input: Arm9Input) -> Result<arm9::Model> {
    validate_arm9(&input)?;
    input.active = true;

    let now = Utc::now();
    let txn = db.begin().await?;
    let retired =
        retire_active::<arm9::Entity, _>(&txn, arm9::Column::EntryId, input.entry_id).await?;
    let model = insert_arm9(&txn, input, now).await?;
    txn.commit().await?;

    info!(id = model.id, retired, "ARM9 version ingested");
    Ok(model)
}
