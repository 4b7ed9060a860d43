use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Metadata sidecar shipped next to a TDSX package.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "smdh")]
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

    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub name_s: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub name_l: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(64))")]
    pub publisher: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub icon_s: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub icon_l: Option<String>,

    #[sea_orm(has_one)]
    pub tdsx: HasOne<super::tdsx::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
