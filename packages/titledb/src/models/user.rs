use serde::{Deserialize, Serialize};

use crate::entity::user;
use crate::error::CatalogError;

use super::shared::default_active;

/// Account view. The password hash is never emitted.
#[derive(Clone, Debug, PartialEq, Serialize, utoipa::ToSchema)]
pub struct UserSchema {
    pub id: i32,
    pub active: bool,
    #[schema(example = "alice")]
    pub name: String,
    pub email: Option<String>,
}

/// `password` is write-only: it is hashed before storage.
#[derive(Clone, Debug, PartialEq, Deserialize, utoipa::ToSchema)]
pub struct UserInput {
    #[serde(default = "default_active")]
    pub active: bool,
    pub name: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<user::Model> for UserSchema {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            active: m.active,
            name: m.name,
            email: m.email,
        }
    }
}

pub fn validate_user(input: &UserInput) -> Result<(), CatalogError> {
    let name = input.name.trim();
    if name.is_empty() || name.chars().count() > 32 {
        return Err(CatalogError::Validation("name must be 1-32 characters".into()));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CatalogError::Validation(
            "name must contain only letters, digits, and underscores".into(),
        ));
    }
    if input.password.len() < 8 || input.password.len() > 128 {
        return Err(CatalogError::Validation(
            "password must be 8-128 characters".into(),
        ));
    }
    if let Some(ref email) = input.email
        && (email.len() > 254 || !email.contains('@'))
    {
        return Err(CatalogError::Validation("email is not valid".into()));
    }
    Ok(())
}
