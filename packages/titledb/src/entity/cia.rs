use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cia")]
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

    /// 16 hex digits.
    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub titleid: String,
    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub name_s: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub name_l: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub publisher: Option<String>,
    /// Base64 icon payloads.
    #[sea_orm(column_type = "Text")]
    pub icon_s: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub icon_l: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
