use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A distributable title. Packaged variants hang off it; only their active
/// rows are considered part of the entry.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(default_value = true)]
    pub active: bool,

    /// NULL for uncategorized entries.
    pub category_id: Option<i32>,
    #[sea_orm(belongs_to, from = "category_id", to = "id")]
    pub category: HasOne<super::category::Entity>,

    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub author: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub headline: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub url: Option<String>,

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
