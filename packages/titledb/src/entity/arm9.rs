use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Executable payload variant.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "arm9")]
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

    pub entry_id: Option<i32>,
    #[sea_orm(belongs_to, from = "entry_id", to = "id")]
    pub entry: HasOne<super::entry::Entity>,

    pub assets_id: Option<i32>,
    #[sea_orm(belongs_to, from = "assets_id", to = "id")]
    pub assets: HasOne<super::assets::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
