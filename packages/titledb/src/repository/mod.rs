//! Storage operations over the catalog tables.
//!
//! Every function is generic over [`ConnectionTrait`] so it runs equally on a
//! pooled connection or inside a transaction.

mod files;
mod relations;
mod titles;
mod users;

pub use files::*;
pub use relations::*;
pub use titles::*;
pub use users::*;

use chrono::{DateTime, Utc};
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::{debug, instrument};

use crate::entity::{arm9, assets, category, cia, entry, group, smdh, tdsx, user, xml};
use crate::error::{CatalogError, Result};

/// Columns every catalog table carries.
pub trait CatalogEntity: EntityTrait {
    /// Human-readable table label used in error messages.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;
    fn active_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn id(model: &Self::Model) -> i32;
    fn updated_at(model: &Self::Model) -> DateTime<Utc>;
}

macro_rules! catalog_entity {
    ($($module:ident => $label:literal),* $(,)?) => {
        $(
            impl CatalogEntity for $module::Entity {
                const LABEL: &'static str = $label;

                fn id_column() -> Self::Column {
                    $module::Column::Id
                }
                fn active_column() -> Self::Column {
                    $module::Column::Active
                }
                fn updated_at_column() -> Self::Column {
                    $module::Column::UpdatedAt
                }
                fn id(model: &Self::Model) -> i32 {
                    model.id
                }
                fn updated_at(model: &Self::Model) -> DateTime<Utc> {
                    model.updated_at
                }
            }
        )*
    };
}

catalog_entity!(
    category => "Category",
    entry => "Entry",
    assets => "Assets",
    cia => "CIA",
    tdsx => "TDSX",
    smdh => "SMDH",
    xml => "XML",
    arm9 => "ARM9",
    user => "User",
    group => "Group",
);

/// The `updated_at` for a row last stamped at `previous`; never moves
/// backwards even if the wall clock does.
pub fn next_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    Ord::max(previous, Utc::now())
}

pub async fn find<E, C>(db: &C, id: i32) -> Result<E::Model>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("{} {id} not found", E::LABEL)))
}

/// Active rows of a table in id order.
pub async fn list_active<E, C>(db: &C) -> Result<Vec<E::Model>>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    Ok(E::find()
        .filter(E::active_column().eq(true))
        .order_by_asc(E::id_column())
        .all(db)
        .await?)
}

/// Flips the active flag of one row. Rows are never hard-deleted; this is
/// the soft delete (and restore).
#[instrument(skip(db), fields(table = E::LABEL))]
pub async fn set_active<E, C>(db: &C, id: i32, active: bool) -> Result<()>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    let existing = find::<E, C>(db, id).await?;
    let stamp = next_updated_at(E::updated_at(&existing));

    E::update_many()
        .col_expr(E::active_column(), Expr::value(active))
        .col_expr(E::updated_at_column(), Expr::value(stamp))
        .filter(E::id_column().eq(id))
        .exec(db)
        .await?;

    debug!(id, active, "Active flag updated");
    Ok(())
}

/// Maps constraint violations from a write onto request-level errors.
pub(crate) fn map_write_err(err: DbErr, label: &str) -> CatalogError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            CatalogError::Conflict(format!("{label}: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            CatalogError::Validation(format!("{label} references a missing row: {detail}"))
        }
        _ => CatalogError::Database(err),
    }
}
