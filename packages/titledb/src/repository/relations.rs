//! Active relationship queries.
//!
//! A parent's variants are the child rows pointing at it with
//! `active = true`. Nothing stops two active rows for one parent (see
//! [`crate::ingest`] for the supersede path that keeps them exclusive), and
//! these queries return every such row.

use sea_orm::*;

use crate::entity::{arm9, category, cia, entry, tdsx};
use crate::error::Result;

use super::CatalogEntity;

/// Active rows of `E` whose `parent_column` equals `parent_id`, in id order.
pub async fn active_children<E, C>(
    db: &C,
    parent_column: E::Column,
    parent_id: i32,
) -> Result<Vec<E::Model>>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    Ok(E::find()
        .filter(parent_column.eq(parent_id))
        .filter(E::active_column().eq(true))
        .order_by_asc(E::id_column())
        .all(db)
        .await?)
}

/// The newest active row of `E` pointing at `parent_id`.
async fn newest_active_child<E, C>(
    db: &C,
    parent_column: E::Column,
    parent_id: i32,
) -> Result<Option<E::Model>>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    Ok(E::find()
        .filter(parent_column.eq(parent_id))
        .filter(E::active_column().eq(true))
        .order_by_desc(E::id_column())
        .one(db)
        .await?)
}

pub async fn active_entries_for_category<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
) -> Result<Vec<entry::Model>> {
    active_children::<entry::Entity, C>(db, entry::Column::CategoryId, category_id).await
}

pub async fn active_cia_for_entry<C: ConnectionTrait>(
    db: &C,
    entry_id: i32,
) -> Result<Vec<cia::Model>> {
    active_children::<cia::Entity, C>(db, cia::Column::EntryId, entry_id).await
}

pub async fn active_tdsx_for_entry<C: ConnectionTrait>(
    db: &C,
    entry_id: i32,
) -> Result<Vec<tdsx::Model>> {
    active_children::<tdsx::Entity, C>(db, tdsx::Column::EntryId, entry_id).await
}

pub async fn active_arm9_for_entry<C: ConnectionTrait>(
    db: &C,
    entry_id: i32,
) -> Result<Vec<arm9::Model>> {
    active_children::<arm9::Entity, C>(db, arm9::Column::EntryId, entry_id).await
}

pub async fn active_cia_for_assets<C: ConnectionTrait>(
    db: &C,
    assets_id: i32,
) -> Result<Vec<cia::Model>> {
    active_children::<cia::Entity, C>(db, cia::Column::AssetsId, assets_id).await
}

pub async fn active_tdsx_for_assets<C: ConnectionTrait>(
    db: &C,
    assets_id: i32,
) -> Result<Vec<tdsx::Model>> {
    active_children::<tdsx::Entity, C>(db, tdsx::Column::AssetsId, assets_id).await
}

pub async fn active_arm9_for_assets<C: ConnectionTrait>(
    db: &C,
    assets_id: i32,
) -> Result<Vec<arm9::Model>> {
    active_children::<arm9::Entity, C>(db, arm9::Column::AssetsId, assets_id).await
}

/// The active TDSX using an SMDH sidecar. If several are active the newest
/// row wins.
pub async fn active_tdsx_for_smdh<C: ConnectionTrait>(
    db: &C,
    smdh_id: i32,
) -> Result<Option<tdsx::Model>> {
    newest_active_child::<tdsx::Entity, C>(db, tdsx::Column::SmdhId, smdh_id).await
}

/// The active TDSX using an XML sidecar. If several are active the newest
/// row wins.
pub async fn active_tdsx_for_xml<C: ConnectionTrait>(
    db: &C,
    xml_id: i32,
) -> Result<Option<tdsx::Model>> {
    newest_active_child::<tdsx::Entity, C>(db, tdsx::Column::XmlId, xml_id).await
}

pub async fn find_category_name<C: ConnectionTrait>(
    db: &C,
    category_id: Option<i32>,
) -> Result<Option<String>> {
    let Some(id) = category_id else {
        return Ok(None);
    };
    Ok(category::Entity::find_by_id(id)
        .one(db)
        .await?
        .map(|c| c.name))
}

/// Looks up an optional foreign key; a null key resolves to `None`.
pub async fn find_optional<E, C>(db: &C, id: Option<i32>) -> Result<Option<E::Model>>
where
    E: CatalogEntity,
    C: ConnectionTrait,
{
    let Some(id) = id else {
        return Ok(None);
    };
    Ok(E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?)
}
