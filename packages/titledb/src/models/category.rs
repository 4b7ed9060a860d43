use serde::{Deserialize, Serialize};

use crate::entity::category;
use crate::error::CatalogError;

use super::shared::{default_active, validate_required};

#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CategorySchema {
    pub id: i32,
    #[schema(example = "Games")]
    pub name: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl From<category::Model> for CategorySchema {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            active: m.active,
        }
    }
}

pub fn validate_category(input: &CategoryInput) -> Result<(), CatalogError> {
    validate_required("name", &input.name, 128)
}
