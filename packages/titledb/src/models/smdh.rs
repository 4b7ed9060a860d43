use serde::{Deserialize, Serialize};

use crate::entity::smdh;
use crate::error::CatalogError;

use super::shared::{FileFields, default_active, validate_optional_len};
use super::tdsx::TdsxInSmdh;

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SmdhSchema {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
    pub icon_s: Option<String>,
    pub icon_l: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct SmdhInput {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
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

/// SMDH embedded under a TDSX: no `active`, no icons, no `tdsx`.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SmdhSummary {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SmdhNested {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub name_s: Option<String>,
    pub name_l: Option<String>,
    pub publisher: Option<String>,
    pub icon_s: Option<String>,
    pub icon_l: Option<String>,
    /// The active TDSX using this sidecar.
    pub tdsx: Option<TdsxInSmdh>,
}

impl From<smdh::Model> for SmdhSchema {
    fn from(m: smdh::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
            icon_s: m.icon_s,
            icon_l: m.icon_l,
        }
    }
}

impl From<smdh::Model> for SmdhSummary {
    fn from(m: smdh::Model) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
        }
    }
}

impl SmdhNested {
    pub fn new(m: smdh::Model, tdsx: Option<TdsxInSmdh>) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            name_s: m.name_s,
            name_l: m.name_l,
            publisher: m.publisher,
            icon_s: m.icon_s,
            icon_l: m.icon_l,
            tdsx,
        }
    }
}

pub fn validate_smdh(input: &SmdhInput) -> Result<(), CatalogError> {
    input.file.validate()?;
    validate_optional_len("name_s", input.name_s.as_deref(), 64)?;
    validate_optional_len("name_l", input.name_l.as_deref(), 128)?;
    validate_optional_len("publisher", input.publisher.as_deref(), 64)?;
    validate_optional_len("icon_s", input.icon_s.as_deref(), 1535)?;
    validate_optional_len("icon_l", input.icon_l.as_deref(), 6144)
}
