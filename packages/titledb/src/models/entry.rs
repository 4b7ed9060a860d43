use serde::{Deserialize, Serialize};

use crate::entity::entry;
use crate::error::CatalogError;

use super::arm9::Arm9InEntry;
use super::cia::CiaInEntry;
use super::shared::{default_active, validate_optional_len, validate_optional_url, validate_required};
use super::tdsx::TdsxInEntry;

/// Flat entry view.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct EntrySchema {
    pub id: i32,
    pub active: bool,
    pub category_id: Option<i32>,
    #[schema(example = "Homebrew Launcher")]
    pub name: String,
    pub author: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Fields accepted when loading an entry. `id` is assigned by storage.
#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct EntryInput {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub category_id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Entry with its category name and active variants embedded.
///
/// `category_id` is load-only here; the embedded `category` carries it.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct EntryNested {
    pub id: i32,
    pub active: bool,
    pub name: String,
    pub author: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Category name only.
    pub category: Option<String>,
    pub cia: Vec<CiaInEntry>,
    pub tdsx: Vec<TdsxInEntry>,
    pub arm9: Vec<Arm9InEntry>,
}

/// Entry as embedded under one of its variants: no `active`, no children.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct EntrySummary {
    pub id: i32,
    pub name: String,
    pub author: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
}

impl From<entry::Model> for EntrySchema {
    fn from(m: entry::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            category_id: m.category_id,
            name: m.name,
            author: m.author,
            headline: m.headline,
            description: m.description,
            url: m.url,
        }
    }
}

impl EntryNested {
    pub fn new(
        m: entry::Model,
        category: Option<String>,
        cia: Vec<CiaInEntry>,
        tdsx: Vec<TdsxInEntry>,
        arm9: Vec<Arm9InEntry>,
    ) -> Self {
        Self {
            id: m.id,
            active: m.active,
            name: m.name,
            author: m.author,
            headline: m.headline,
            description: m.description,
            url: m.url,
            category,
            cia,
            tdsx,
            arm9,
        }
    }
}

impl EntrySummary {
    pub fn new(m: entry::Model, category: Option<String>) -> Self {
        Self {
            id: m.id,
            name: m.name,
            author: m.author,
            headline: m.headline,
            description: m.description,
            url: m.url,
            category,
        }
    }
}

pub fn validate_entry(input: &EntryInput) -> Result<(), CatalogError> {
    validate_required("name", &input.name, 128)?;
    validate_optional_len("author", input.author.as_deref(), 128)?;
    validate_optional_len("headline", input.headline.as_deref(), 128)?;
    validate_optional_len("description", input.description.as_deref(), 4096)?;
    validate_optional_url("url", input.url.as_deref())
}
