use serde::{Deserialize, Serialize};

use crate::entity::assets;
use crate::error::CatalogError;

use super::arm9::Arm9InAssets;
use super::cia::CiaInAssets;
use super::shared::{FileFields, default_active, validate_optional_len};
use super::tdsx::TdsxInAssets;

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct AssetsSchema {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub mapping: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct AssetsInput {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    #[serde(default)]
    pub mapping: Option<String>,
}

/// Assets as embedded under a variant.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct AssetsSummary {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
    pub mapping: Option<String>,
}

/// Assets with every active variant that references the bundle.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct AssetsNested {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub mapping: Option<String>,
    pub cia: Vec<CiaInAssets>,
    pub tdsx: Vec<TdsxInAssets>,
    pub arm9: Vec<Arm9InAssets>,
}

impl From<assets::Model> for AssetsSchema {
    fn from(m: assets::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            mapping: m.mapping,
        }
    }
}

impl From<assets::Model> for AssetsSummary {
    fn from(m: assets::Model) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
            mapping: m.mapping,
        }
    }
}

impl AssetsNested {
    pub fn new(
        m: assets::Model,
        cia: Vec<CiaInAssets>,
        tdsx: Vec<TdsxInAssets>,
        arm9: Vec<Arm9InAssets>,
    ) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            mapping: m.mapping,
            cia,
            tdsx,
            arm9,
        }
    }
}

/// The mapping, when present, must be a JSON object.
pub fn validate_assets(input: &AssetsInput) -> Result<(), CatalogError> {
    input.file.validate()?;
    validate_optional_len("mapping", input.mapping.as_deref(), 4096)?;
    if let Some(ref raw) = input.mapping {
        serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw).map_err(|e| {
            CatalogError::Validation(format!("mapping must be a JSON object: {e}"))
        })?;
    }
    Ok(())
}
