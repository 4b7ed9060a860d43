use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared icon/resource bundle reused across variants.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(default_value = true)]
    pub active: bool,

    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub version: Option<String>,
    pub size: i64,
    pub mtime: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[sea_orm(column_type = "String(StringLen::N(512))")]
    pub path: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub etag: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub sha256: String,

    /// JSON object mapping resource keys to resources.
    #[sea_orm(column_type = "Text")]
    pub mapping: Option<String>,

    #[sea_orm(has_many)]
    pub cia: HasMany<super::cia::Entity>,
    #[sea_orm(has_many)]
    pub tdsx: HasMany<super::tdsx::Entity>,
    #[sea_orm(has_many)]
    pub arm9: HasMany<super::arm9::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parses `mapping` into its key/resource table. A missing mapping is an
    /// empty table.
    pub fn resources(&self) -> Result<serde_json::Map<String, Json>, serde_json::Error> {
        match self.mapping.as_deref() {
            Some(raw) => serde_json::from_str(raw),
            None => Ok(serde_json::Map::new()),
        }
    }
}
