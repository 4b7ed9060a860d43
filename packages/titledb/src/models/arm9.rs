use serde::{Deserialize, Serialize};

use crate::entity::{arm9, assets, entry};
use crate::error::CatalogError;

use super::assets::AssetsSummary;
use super::entry::EntrySummary;
use super::shared::{FileFields, default_active};

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Arm9Schema {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub entry_id: Option<i32>,
    pub assets_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct Arm9Input {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    #[serde(default)]
    pub entry_id: Option<i32>,
    #[serde(default)]
    pub assets_id: Option<i32>,
}

/// ARM9 with its entry and assets embedded. Unlike the CIA and TDSX
/// embeddings, both keep their `active` flag.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Arm9Nested {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub entry: Option<EntryInArm9>,
    pub assets: Option<AssetsInArm9>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct EntryInArm9 {
    pub id: i32,
    pub active: bool,
    pub name: String,
    pub author: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Category name only.
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct AssetsInArm9 {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub mapping: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Arm9InEntry {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub assets: Option<AssetsSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Arm9InAssets {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub entry: Option<EntrySummary>,
}

impl From<arm9::Model> for Arm9Schema {
    fn from(m: arm9::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            entry_id: m.entry_id,
            assets_id: m.assets_id,
        }
    }
}

impl Arm9Nested {
    pub fn new(m: arm9::Model, entry: Option<EntryInArm9>, assets: Option<AssetsInArm9>) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            entry,
            assets,
        }
    }
}

impl EntryInArm9 {
    pub fn new(m: entry::Model, category: Option<String>) -> Self {
        Self {
            id: m.id,
            active: m.active,
            name: m.name,
            author: m.author,
            headline: m.headline,
            description: m.description,
            url: m.url,
            category,
        }
    }
}

impl From<assets::Model> for AssetsInArm9 {
    fn from(m: assets::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            mapping: m.mapping,
        }
    }
}

impl Arm9InEntry {
    pub fn new(m: arm9::Model, assets: Option<AssetsSummary>) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            assets,
        }
    }
}

impl Arm9InAssets {
    pub fn new(m: arm9::Model, entry: Option<EntrySummary>) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            entry,
        }
    }
}

pub fn validate_arm9(input: &Arm9Input) -> Result<(), CatalogError> {
    input.file.validate()
}
