//! Builds the nested views from storage.
//!
//! Child collections come from the active relationship queries; single
//! relations follow the foreign key regardless of the target's active flag.

use sea_orm::ConnectionTrait;

use crate::entity::{arm9, assets, cia, entry, smdh, tdsx, xml};
use crate::error::Result;
use crate::models::arm9::{Arm9InAssets, Arm9InEntry, Arm9Nested, AssetsInArm9, EntryInArm9};
use crate::models::assets::{AssetsNested, AssetsSummary};
use crate::models::cia::{CiaInAssets, CiaInEntry, CiaNested, CiaV0};
use crate::models::entry::{EntryNested, EntrySummary};
use crate::models::smdh::{SmdhNested, SmdhSummary};
use crate::models::tdsx::{TdsxInAssets, TdsxInEntry, TdsxInSmdh, TdsxInXml, TdsxLinks, TdsxNested};
use crate::models::xml::{XmlNested, XmlSummary};
use crate::repository::{self, find, find_optional};

async fn entry_summary<C: ConnectionTrait>(
    db: &C,
    entry_id: Option<i32>,
) -> Result<Option<EntrySummary>> {
    match find_optional::<entry::Entity, C>(db, entry_id).await? {
        Some(m) => {
            let category = repository::find_category_name(db, m.category_id).await?;
            Ok(Some(EntrySummary::new(m, category)))
        }
        None => Ok(None),
    }
}

async fn assets_summary<C: ConnectionTrait>(
    db: &C,
    assets_id: Option<i32>,
) -> Result<Option<AssetsSummary>> {
    Ok(find_optional::<assets::Entity, C>(db, assets_id)
        .await?
        .map(AssetsSummary::from))
}

async fn tdsx_links<C: ConnectionTrait>(db: &C, m: &tdsx::Model) -> Result<TdsxLinks> {
    Ok(TdsxLinks {
        smdh: find_optional::<smdh::Entity, C>(db, m.smdh_id)
            .await?
            .map(SmdhSummary::from),
        xml: find_optional::<xml::Entity, C>(db, m.xml_id)
            .await?
            .map(XmlSummary::from),
        entry: entry_summary(db, m.entry_id).await?,
        assets: assets_summary(db, m.assets_id).await?,
    })
}

pub async fn load_entry_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<EntryNested> {
    let m = find::<entry::Entity, C>(db, id).await?;
    let category = repository::find_category_name(db, m.category_id).await?;

    let mut cia = Vec::new();
    for row in repository::active_cia_for_entry(db, id).await? {
        let assets = assets_summary(db, row.assets_id).await?;
        cia.push(CiaInEntry::new(row, assets));
    }

    let mut tdsx = Vec::new();
    for row in repository::active_tdsx_for_entry(db, id).await? {
        let links = tdsx_links(db, &row).await?;
        tdsx.push(TdsxInEntry::new(row, links));
    }

    let mut arm9 = Vec::new();
    for row in repository::active_arm9_for_entry(db, id).await? {
        let assets = assets_summary(db, row.assets_id).await?;
        arm9.push(Arm9InEntry::new(row, assets));
    }

    Ok(EntryNested::new(m, category, cia, tdsx, arm9))
}

pub async fn load_cia_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<CiaNested> {
    let m = find::<cia::Entity, C>(db, id).await?;
    let entry = entry_summary(db, m.entry_id).await?;
    let assets = assets_summary(db, m.assets_id).await?;
    Ok(CiaNested::new(m, entry, assets))
}

pub async fn load_tdsx_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<TdsxNested> {
    let m = find::<tdsx::Entity, C>(db, id).await?;
    let links = tdsx_links(db, &m).await?;
    Ok(TdsxNested::new(m, links))
}

pub async fn load_smdh_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<SmdhNested> {
    let m = find::<smdh::Entity, C>(db, id).await?;
    let tdsx = match repository::active_tdsx_for_smdh(db, id).await? {
        Some(row) => {
            let links = tdsx_links(db, &row).await?;
            Some(TdsxInSmdh::new(row, links))
        }
        None => None,
    };
    Ok(SmdhNested::new(m, tdsx))
}

pub async fn load_xml_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<XmlNested> {
    let m = find::<xml::Entity, C>(db, id).await?;
    let tdsx = match repository::active_tdsx_for_xml(db, id).await? {
        Some(row) => {
            let links = tdsx_links(db, &row).await?;
            Some(TdsxInXml::new(row, links))
        }
        None => None,
    };
    Ok(XmlNested::new(m, tdsx))
}

pub async fn load_arm9_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<Arm9Nested> {
    let m = find::<arm9::Entity, C>(db, id).await?;
    let entry = match find_optional::<entry::Entity, C>(db, m.entry_id).await? {
        Some(e) => {
            let category = repository::find_category_name(db, e.category_id).await?;
            Some(EntryInArm9::new(e, category))
        }
        None => None,
    };
    let assets = find_optional::<assets::Entity, C>(db, m.assets_id)
        .await?
        .map(AssetsInArm9::from);
    Ok(Arm9Nested::new(m, entry, assets))
}

pub async fn load_assets_nested<C: ConnectionTrait>(db: &C, id: i32) -> Result<AssetsNested> {
    let m = find::<assets::Entity, C>(db, id).await?;

    let mut cia = Vec::new();
    for row in repository::active_cia_for_assets(db, id).await? {
        let entry = entry_summary(db, row.entry_id).await?;
        cia.push(CiaInAssets::new(row, entry));
    }

    let mut tdsx = Vec::new();
    for row in repository::active_tdsx_for_assets(db, id).await? {
        let links = tdsx_links(db, &row).await?;
        tdsx.push(TdsxInAssets::new(row, links));
    }

    let mut arm9 = Vec::new();
    for row in repository::active_arm9_for_assets(db, id).await? {
        let entry = entry_summary(db, row.entry_id).await?;
        arm9.push(Arm9InAssets::new(row, entry));
    }

    Ok(AssetsNested::new(m, cia, tdsx, arm9))
}

/// Every active CIA in the legacy projection.
pub async fn list_cia_v0<C: ConnectionTrait>(db: &C) -> Result<Vec<CiaV0>> {
    Ok(repository::list_active::<cia::Entity, C>(db)
        .await?
        .into_iter()
        .map(CiaV0::from)
        .collect())
}
