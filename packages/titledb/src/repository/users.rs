use chrono::Utc;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{group, user};
use crate::error::{CatalogError, Result};
use crate::models::user::{UserInput, validate_user};
use crate::utils::hash;

/// Stores a new account with its password hashed. A taken name is a
/// [`CatalogError::Conflict`].
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_user<C: ConnectionTrait>(db: &C, input: UserInput) -> Result<user::Model> {
    validate_user(&input)?;

    let password = hash::hash_password(&input.password)
        .map_err(|e| CatalogError::Internal(format!("Password hash error: {e}")))?;

    let now = Utc::now();
    let model = user::ActiveModel {
        active: Set(input.active),
        name: Set(input.name.trim().to_string()),
        password: Set(password),
        email: Set(input.email),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = model.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CatalogError::Conflict("User name is already taken".into())
        }
        _ => CatalogError::Database(e),
    })?;

    info!(id = created.id, "User created");
    Ok(created)
}

pub async fn find_user_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<user::Model> {
    user::Entity::find()
        .filter(user::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("User '{name}' not found")))
}

pub async fn find_group_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<Option<group::Model>> {
    Ok(group::Entity::find()
        .filter(group::Column::Name.eq(name))
        .one(db)
        .await?)
}
