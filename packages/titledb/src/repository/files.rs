use chrono::{DateTime, Utc};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{arm9, assets, cia, smdh, tdsx, xml};
use crate::error::Result;
use crate::models::arm9::{Arm9Input, validate_arm9};
use crate::models::assets::{AssetsInput, validate_assets};
use crate::models::cia::{CiaInput, validate_cia};
use crate::models::shared::set_file_fields;
use crate::models::smdh::{SmdhInput, validate_smdh};
use crate::models::tdsx::{TdsxInput, validate_tdsx};
use crate::models::xml::{XmlInput, validate_xml};

use super::{find, map_write_err, next_updated_at};

fn apply_assets(model: &mut assets::ActiveModel, input: AssetsInput) {
    model.active = Set(input.active);
    set_file_fields!(model, input.file);
    model.mapping = Set(input.mapping);
}

#[instrument(skip(db, input), fields(url = %input.file.url))]
pub async fn create_assets<C: ConnectionTrait>(
    db: &C,
    input: AssetsInput,
) -> Result<assets::Model> {
    validate_assets(&input)?;

    let now = Utc::now();
    let mut model = assets::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_assets(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "Assets"))
}

#[instrument(skip(db, input))]
pub async fn update_assets<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: AssetsInput,
) -> Result<assets::Model> {
    validate_assets(&input)?;

    let existing = find::<assets::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: assets::ActiveModel = existing.into();
    apply_assets(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "Assets"))
}

fn apply_cia(model: &mut cia::ActiveModel, input: CiaInput) {
    model.active = Set(input.active);
    set_file_fields!(model, input.file);
    model.entry_id = Set(input.entry_id);
    model.assets_id = Set(input.assets_id);
    model.titleid = Set(input.titleid);
    model.name_s = Set(input.name_s);
    model.name_l = Set(input.name_l);
    model.publisher = Set(input.publisher);
    model.icon_s = Set(input.icon_s);
    model.icon_l = Set(input.icon_l);
}

/// Inserts an already validated CIA row.
pub(crate) async fn insert_cia<C: ConnectionTrait>(
    db: &C,
    input: CiaInput,
    now: DateTime<Utc>,
) -> Result<cia::Model> {
    let mut model = cia::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_cia(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "CIA"))
}

#[instrument(skip(db, input), fields(titleid = %input.titleid, entry_id = ?input.entry_id))]
pub async fn create_cia<C: ConnectionTrait>(db: &C, input: CiaInput) -> Result<cia::Model> {
    validate_cia(&input)?;
    insert_cia(db, input, Utc::now()).await
}

#[instrument(skip(db, input))]
pub async fn update_cia<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: CiaInput,
) -> Result<cia::Model> {
    validate_cia(&input)?;

    let existing = find::<cia::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: cia::ActiveModel = existing.into();
    apply_cia(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "CIA"))
}

fn apply_tdsx(model: &mut tdsx::ActiveModel, input: TdsxInput) {
    model.active = Set(input.active);
    set_file_fields!(model, input.file);
    model.entry_id = Set(input.entry_id);
    model.assets_id = Set(input.assets_id);
    model.smdh_id = Set(input.smdh_id);
    model.xml_id = Set(input.xml_id);
    model.name = Set(input.name);
}

pub(crate) async fn insert_tdsx<C: ConnectionTrait>(
    db: &C,
    input: TdsxInput,
    now: DateTime<Utc>,
) -> Result<tdsx::Model> {
    let mut model = tdsx::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_tdsx(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "TDSX"))
}

#[instrument(skip(db, input), fields(entry_id = ?input.entry_id))]
pub async fn create_tdsx<C: ConnectionTrait>(db: &C, input: TdsxInput) -> Result<tdsx::Model> {
    validate_tdsx(&input)?;
    insert_tdsx(db, input, Utc::now()).await
}

#[instrument(skip(db, input))]
pub async fn update_tdsx<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: TdsxInput,
) -> Result<tdsx::Model> {
    validate_tdsx(&input)?;

    let existing = find::<tdsx::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: tdsx::ActiveModel = existing.into();
    apply_tdsx(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "TDSX"))
}

fn apply_smdh(model: &mut smdh::ActiveModel, input: SmdhInput) {
    model.active = Set(input.active);
    set_file_fields!(model, input.file);
    model.name_s = Set(input.name_s);
    model.name_l = Set(input.name_l);
    model.publisher = Set(input.publisher);
    model.icon_s = Set(input.icon_s);
    model.icon_l = Set(input.icon_l);
}

#[instrument(skip(db, input), fields(url = %input.file.url))]
pub async fn create_smdh<C: ConnectionTrait>(db: &C, input: SmdhInput) -> Result<smdh::Model> {
    validate_smdh(&input)?;

    let now = Utc::now();
    let mut model = smdh::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_smdh(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "SMDH"))
}

#[instrument(skip(db, input))]
pub async fn update_smdh<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: SmdhInput,
) -> Result<smdh::Model> {
    validate_smdh(&input)?;

    let existing = find::<smdh::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: smdh::ActiveModel = existing.into();
    apply_smdh(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "SMDH"))
}

fn apply_xml(model: &mut xml::ActiveModel, input: XmlInput) {
    model.active = Set(input.active);
    set_file_fields!(model, input.file);
}

#[instrument(skip(db, input), fields(url = %input.file.url))]
pub async fn create_xml<C: ConnectionTrait>(db: &C, input: XmlInput) -> Result<xml::Model> {
    validate_xml(&input)?;

    let now = Utc::now();
    let mut model = xml::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_xml(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "XML"))
}

#[instrument(skip(db, input))]
pub async fn update_xml<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: XmlInput,
) -> Result<xml::Model> {
    validate_xml(&input)?;

    let existing = find::<xml::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: xml::ActiveModel = existing.into();
    apply_xml(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "XML"))
}

fn apply_arm9(model: &mut arm9::ActiveModel, input: Arm9Input) {
    model.active = Set(input.active);
    set_file_fields!(model, input.file);
    model.entry_id = Set(input.entry_id);
    model.assets_id = Set(input.assets_id);
}

pub(crate) async fn insert_arm9<C: ConnectionTrait>(
    db: &C,
    input: Arm9Input,
    now: DateTime<Utc>,
) -> Result<arm9::Model> {
    let mut model = arm9::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply_arm9(&mut model, input);

    model.insert(db).await.map_err(|e| map_write_err(e, "ARM9"))
}

#[instrument(skip(db, input), fields(entry_id = ?input.entry_id))]
pub async fn create_arm9<C: ConnectionTrait>(db: &C, input: Arm9Input) -> Result<arm9::Model> {
    validate_arm9(&input)?;
    insert_arm9(db, input, Utc::now()).await
}

#[instrument(skip(db, input))]
pub async fn update_arm9<C: ConnectionTrait>(
    db: &C,
    id: i32,
    input: Arm9Input,
) -> Result<arm9::Model> {
    validate_arm9(&input)?;

    let existing = find::<arm9::Entity, C>(db, id).await?;
    let stamp = next_updated_at(existing.updated_at);
    let mut model: arm9::ActiveModel = existing.into();
    apply_arm9(&mut model, input);
    model.updated_at = Set(stamp);

    model.update(db).await.map_err(|e| map_write_err(e, "ARM9"))
}
