use serde::{Deserialize, Serialize};

use crate::entity::tdsx;
use crate::error::CatalogError;

use super::assets::AssetsSummary;
use super::entry::EntrySummary;
use super::shared::{FileFields, default_active, validate_optional_len};
use super::smdh::SmdhSummary;
use super::xml::XmlSummary;

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TdsxSchema {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub entry_id: Option<i32>,
    pub assets_id: Option<i32>,
    pub smdh_id: Option<i32>,
    pub xml_id: Option<i32>,
    /// Text, like the storage column.
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct TdsxInput {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    #[serde(default)]
    pub entry_id: Option<i32>,
    #[serde(default)]
    pub assets_id: Option<i32>,
    #[serde(default)]
    pub smdh_id: Option<i32>,
    #[serde(default)]
    pub xml_id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// TDSX with sidecars, entry and assets embedded; the foreign keys are
/// load-only.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TdsxNested {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub name: Option<String>,
    pub smdh: Option<SmdhSummary>,
    pub xml: Option<XmlSummary>,
    pub entry: Option<EntrySummary>,
    pub assets: Option<AssetsSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TdsxInEntry {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub name: Option<String>,
    pub smdh: Option<SmdhSummary>,
    pub xml: Option<XmlSummary>,
    pub assets: Option<AssetsSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TdsxInAssets {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub name: Option<String>,
    pub smdh: Option<SmdhSummary>,
    pub xml: Option<XmlSummary>,
    pub entry: Option<EntrySummary>,
}

/// TDSX embedded under its SMDH sidecar.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TdsxInSmdh {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub name: Option<String>,
    pub xml: Option<XmlSummary>,
    pub entry: Option<EntrySummary>,
    pub assets: Option<AssetsSummary>,
}

/// TDSX embedded under its XML sidecar.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct TdsxInXml {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub name: Option<String>,
    pub smdh: Option<SmdhSummary>,
    pub entry: Option<EntrySummary>,
    pub assets: Option<AssetsSummary>,
}

/// Relations of one TDSX row, resolved by the loader.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TdsxLinks {
    pub smdh: Option<SmdhSummary>,
    pub xml: Option<XmlSummary>,
    pub entry: Option<EntrySummary>,
    pub assets: Option<AssetsSummary>,
}

impl From<tdsx::Model> for TdsxSchema {
    fn from(m: tdsx::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            entry_id: m.entry_id,
            assets_id: m.assets_id,
            smdh_id: m.smdh_id,
            xml_id: m.xml_id,
            name: m.name,
        }
    }
}

impl TdsxNested {
    pub fn new(m: tdsx::Model, links: TdsxLinks) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            name: m.name,
            smdh: links.smdh,
            xml: links.xml,
            entry: links.entry,
            assets: links.assets,
        }
    }
}

impl TdsxInEntry {
    pub fn new(m: tdsx::Model, links: TdsxLinks) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            name: m.name,
            smdh: links.smdh,
            xml: links.xml,
            assets: links.assets,
        }
    }
}

impl TdsxInAssets {
    pub fn new(m: tdsx::Model, links: TdsxLinks) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            name: m.name,
            smdh: links.smdh,
            xml: links.xml,
            entry: links.entry,
        }
    }
}

impl TdsxInSmdh {
    pub fn new(m: tdsx::Model, links: TdsxLinks) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            name: m.name,
            xml: links.xml,
            entry: links.entry,
            assets: links.assets,
        }
    }
}

impl TdsxInXml {
    pub fn new(m: tdsx::Model, links: TdsxLinks) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            name: m.name,
            smdh: links.smdh,
            entry: links.entry,
            assets: links.assets,
        }
    }
}

pub fn validate_tdsx(input: &TdsxInput) -> Result<(), CatalogError> {
    input.file.validate()?;
    validate_optional_len("name", input.name.as_deref(), 256)
}
