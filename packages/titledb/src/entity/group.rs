use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Members of the group named [`EDITORS`] may edit the catalog.
pub const EDITORS: &str = "editors";

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(default_value = true)]
    pub active: bool,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
