use serde::{Deserialize, Serialize};

use crate::entity::xml;
use crate::error::CatalogError;

use super::shared::{FileFields, default_active};
use super::tdsx::TdsxInXml;

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct XmlSchema {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct XmlInput {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct XmlSummary {
    pub id: i32,
    #[serde(flatten)]
    pub file: FileFields,
}

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct XmlNested {
    pub id: i32,
    pub active: bool,
    #[serde(flatten)]
    pub file: FileFields,
    pub tdsx: Option<TdsxInXml>,
}

impl From<xml::Model> for XmlSchema {
    fn from(m: xml::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
        }
    }
}

impl From<xml::Model> for XmlSummary {
    fn from(m: xml::Model) -> Self {
        Self {
            id: m.id,
            file: FileFields::from(&m),
        }
    }
}

impl XmlNested {
    pub fn new(m: xml::Model, tdsx: Option<TdsxInXml>) -> Self {
        Self {
            id: m.id,
            active: m.active,
            file: FileFields::from(&m),
            tdsx,
        }
    }
}

pub fn validate_xml(input: &XmlInput) -> Result<(), CatalogError> {
    input.file.validate()
}
