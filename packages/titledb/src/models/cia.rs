use serde::{Deserialize, Serialize};

use crate::entity::cia;
use crate::error::CatalogError;

use super::assets::AssetsSummary;
use super::entry::EntrySummary;
use super::shared::{FileFields, default_active, validate_optional_len};

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CiaSchema {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub entry_id: Option<i32>,
    pub assets_id: Option<i32>,
    #[schema(example = "000400000F800100")]
    pub titleid: String,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
    pub icon_s: Option<String>,
    pub icon_l: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct CiaInput {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    #[serde(default)]
    pub entry_id: Option<i32>,
    #[serde(default)]
    pub assets_id: Option<i32>,
    pub titleid: String,
    #[serde(default)]
    pub name_s: Option<String>,
    #[serde(default)]
    pub name_l: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub icon_s: Option<String>,
    #[serde(default)]
    pub icon_l: Option<String>,
}

/// CIA with its entry and assets embedded; the foreign keys are load-only.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CiaNested {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub titleid: String,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
    pub icon_s: Option<String>,
    pub icon_l: Option<String>,
    pub entry: Option<EntrySummary>,
    pub assets: Option<AssetsSummary>,
}

/// CIA listed under its entry. Icons are left out to keep listings small.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CiaInEntry {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub titleid: String,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
    pub assets: Option<AssetsSummary>,
}

/// CIA listed under an assets bundle.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CiaInAssets {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub titleid: String,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
    pub icon_s: Option<String>,
    pub icon_l: Option<String>,
    pub entry: Option<EntrySummary>,
}

/// Legacy projection kept for older consumers: renamed fields and `mtime`
/// as Unix seconds.
///
/// Older consumers also received `create_time` and `update_time` as
/// `%Y-%m-%d %H:%M:%S` strings. Those are no longer emitted since no view
/// carries the row timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CiaV0 {
    pub id: i32,
    pub titleid: String,
    /// `name_s`
    pub name: Option<String>,
    /// `name_l`
    pub description: Option<String>,
    /// `publisher`
    pub author: Option<String>,
    pub size: i64,
    #[schema(example = 1462104000)]
    pub mtime: i64,
    pub url: String,
}

impl From<cia::Model> for CiaSchema {
    fn from(m: cia::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            entry_id: m.entry_id,
            assets_id: m.assets_id,
            titleid: m.titleid,
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
            icon_s: m.icon_s,
            icon_l: m.icon_l,
        }
    }
}

impl CiaNested {
    pub fn new(m: cia::Model, entry: Option<EntrySummary>, assets: Option<AssetsSummary>) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            titleid: m.titleid,
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
            icon_s: m.icon_s,
            icon_l: m.icon_l,
            entry,
            assets,
        }
    }
}

impl CiaInEntry {
    pub fn new(m: cia::Model, assets: Option<AssetsSummary>) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            titleid: m.titleid,
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
            assets,
        }
    }
}

impl CiaInAssets {
    pub fn new(m: cia::Model, entry: Option<EntrySummary>) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            titleid: m.titleid,
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
            icon_s: m.icon_s,
            icon_l: m.icon_l,
            entry,
        }
    }
}

impl From<cia::Model> for CiaV0 {
    fn from(m: cia::Model) -> Self {
        Self {
            id: m.id,
            titleid: m.titleid,
            name: m.name_s,
            description: m.name_l,
            author: m.publisher,
            size: m.size,
            mtime: m.mtime.timestamp(),
            url: m.url,
        }
    }
}

pub fn validate_cia(input: &CiaInput) -> Result<(), CatalogError> {
    input.file.validate()?;
    validate_titleid(&input.titleid)?;
    validate_optional_len("name_s", input.name_s.as_deref(), 64)?;
    validate_optional_len("name_l", input.name_l.as_deref(), 128)?;
    validate_optional_len("publisher", input.publisher.as_deref(), 64)?;
    validate_optional_len("icon_s", input.icon_s.as_deref(), 1535)?;
    validate_optional_len("icon_l", input.icon_l.as_deref(), 6144)
}

/// Title IDs are 16 hex digits.
pub fn validate_titleid(titleid: &str) -> Result<(), CatalogError> {
    if titleid.len() != 16 || !titleid.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CatalogError::Validation(
            "titleid must be 16 hex digits".into(),
        ));
    }
    Ok(())
}
