use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

/// Wire format for every date field except the legacy epoch `mtime`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).map(|naive| naive.and_utc())
}

/// `#[serde(with = "iso_datetime")]` for `DateTime<Utc>` fields.
pub mod iso_datetime {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_datetime(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).map_err(|e| {
            serde::de::Error::custom(format!("expected {DATETIME_FORMAT} datetime: {e}"))
        })
    }
}

/// File attributes shared by every packaged variant and sidecar.
///
/// Flattened into each view so the emitted field order is
/// `id, active, version, size, mtime, url, path, etag, sha256, ...`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FileFields {
    #[schema(example = "1.2.0")]
    pub version: Option<String>,
    /// Size in bytes.
    pub size: i64,
    #[serde(with = "iso_datetime")]
    #[schema(value_type = String, example = "2016-05-01T12:00:00Z")]
    pub mtime: DateTime<Utc>,
    /// Where the package was fetched from.
    #[schema(example = "https://example.com/releases/app.cia")]
    pub url: String,
    /// Storage path of the cached copy.
    pub path: Option<String>,
    pub etag: Option<String>,
    /// Hex-encoded SHA-256 of the content.
    pub sha256: String,
}

impl FileFields {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_optional_len("version", self.version.as_deref(), 64)?;
        if self.size < 0 {
            return Err(CatalogError::Validation("size must be >= 0".into()));
        }
        validate_url("url", &self.url)?;
        validate_optional_len("path", self.path.as_deref(), 512)?;
        validate_optional_len("etag", self.etag.as_deref(), 128)?;
        validate_sha256(&self.sha256)
    }
}

/// Builds [`FileFields`] from any entity model carrying the file columns.
macro_rules! file_fields_from {
    ($($entity:ident),* $(,)?) => {
        $(
            impl From<&crate::entity::$entity::Model> for FileFields {
                fn from(m: &crate::entity::$entity::Model) -> Self {
                    Self {
                        version: m.version.clone(),
                        size: m.size,
                        mtime: m.mtime,
                        url: m.url.clone(),
                        path: m.path.clone(),
                        etag: m.etag.clone(),
                        sha256: m.sha256.clone(),
                    }
                }
            }
        )*
    };
}

file_fields_from!(assets, cia, tdsx, smdh, xml, arm9);

/// Copies [`FileFields`] onto an active model with the file columns.
macro_rules! set_file_fields {
    ($model:expr, $file:expr) => {{
        let file: $crate::models::shared::FileFields = $file;
        $model.version = ::sea_orm::Set(file.version);
        $model.size = ::sea_orm::Set(file.size);
        $model.mtime = ::sea_orm::Set(file.mtime);
        $model.url = ::sea_orm::Set(file.url);
        $model.path = ::sea_orm::Set(file.path);
        $model.etag = ::sea_orm::Set(file.etag);
        $model.sha256 = ::sea_orm::Set(file.sha256);
    }};
}
pub(crate) use set_file_fields;

pub fn default_active() -> bool {
    true
}

/// Accepts absolute `http`, `https`, `ftp` and `ftps` URLs with a host.
pub fn validate_url(field: &str, value: &str) -> Result<(), CatalogError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| CatalogError::Validation(format!("{field} is not a valid URL: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https" | "ftp" | "ftps") {
        return Err(CatalogError::Validation(format!(
            "{field} must use http, https, ftp or ftps"
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(CatalogError::Validation(format!("{field} must have a host")));
    }
    if value.chars().count() > 2048 {
        return Err(CatalogError::Validation(format!(
            "{field} must be at most 2048 characters"
        )));
    }
    Ok(())
}

pub fn validate_optional_url(field: &str, value: Option<&str>) -> Result<(), CatalogError> {
    match value {
        Some(v) => validate_url(field, v),
        None => Ok(()),
    }
}

/// Validate a required text field (1..=max Unicode characters after trimming).
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CatalogError> {
    let len = value.trim().chars().count();
    if len == 0 || len > max {
        return Err(CatalogError::Validation(format!(
            "{field} must be 1-{max} characters"
        )));
    }
    Ok(())
}

pub fn validate_optional_len(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CatalogError> {
    if let Some(v) = value
        && v.chars().count() > max
    {
        return Err(CatalogError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn validate_sha256(value: &str) -> Result<(), CatalogError> {
    if value.len() != 64 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CatalogError::Validation(
            "sha256 must be 64 hex digits".into(),
        ));
    }
    Ok(())
}
