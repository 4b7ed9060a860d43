//! Registry of every serialization view, checked once at startup.

use serde_json::Value;
use tracing::info;
use utoipa::OpenApi;

use crate::error::CatalogError;
use crate::models::arm9::{
    Arm9InAssets, Arm9InEntry, Arm9Input, Arm9Nested, Arm9Schema, AssetsInArm9, EntryInArm9,
};
use crate::models::assets::{AssetsInput, AssetsNested, AssetsSchema, AssetsSummary};
use crate::models::category::{CategoryInput, CategorySchema};
use crate::models::cia::{CiaInAssets, CiaInEntry, CiaInput, CiaNested, CiaSchema, CiaV0};
use crate::models::entry::{EntryInput, EntryNested, EntrySchema, EntrySummary};
use crate::models::shared::FileFields;
use crate::models::smdh::{SmdhInput, SmdhNested, SmdhSchema, SmdhSummary};
use crate::models::tdsx::{
    TdsxInAssets, TdsxInEntry, TdsxInSmdh, TdsxInXml, TdsxInput, TdsxNested, TdsxSchema,
};
use crate::models::user::{UserInput, UserSchema};
use crate::models::xml::{XmlInput, XmlNested, XmlSchema, XmlSummary};

/// Server-assigned columns that no view may carry.
const HIDDEN_FIELDS: &[&str] = &["created_at", "updated_at"];

const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "titledb catalog",
        version = "1.0.0",
        description = "Serialization views of the title distribution catalog"
    ),
    components(schemas(
        FileFields,
        CategorySchema, CategoryInput,
        EntrySchema, EntryInput, EntryNested, EntrySummary,
        AssetsSchema, AssetsInput, AssetsNested, AssetsSummary,
        CiaSchema, CiaInput, CiaNested, CiaInEntry, CiaInAssets, CiaV0,
        TdsxSchema, TdsxInput, TdsxNested, TdsxInEntry, TdsxInAssets, TdsxInSmdh, TdsxInXml,
        SmdhSchema, SmdhInput, SmdhNested, SmdhSummary,
        XmlSchema, XmlInput, XmlNested, XmlSummary,
        Arm9Schema, Arm9Input, Arm9Nested, Arm9InEntry, Arm9InAssets, EntryInArm9, AssetsInArm9,
        UserSchema, UserInput,
    ))
)]
pub struct CatalogDoc;

/// The view catalog as an OpenAPI document.
pub fn catalog_document() -> Result<Value, CatalogError> {
    Ok(serde_json::to_value(CatalogDoc::openapi())?)
}

/// Checks that every view reference resolves and that no view exposes a
/// server-assigned timestamp.
pub fn validate_views() -> Result<(), CatalogError> {
    let doc = catalog_document()?;
    let schemas = doc
        .pointer("/components/schemas")
        .and_then(Value::as_object)
        .ok_or_else(|| CatalogError::Schema("no view components registered".into()))?;

    let mut refs = Vec::new();
    collect_refs(&doc, &mut refs);
    for reference in &refs {
        let name = reference.strip_prefix(SCHEMA_REF_PREFIX).ok_or_else(|| {
            CatalogError::Schema(format!("unsupported reference {reference}"))
        })?;
        if !schemas.contains_key(name) {
            return Err(CatalogError::Schema(format!(
                "view references unknown component {name}"
            )));
        }
    }

    for (name, schema) in schemas {
        let mut fields = Vec::new();
        collect_properties(schema, &mut fields);
        if let Some(hidden) = fields.iter().find(|f| HIDDEN_FIELDS.contains(&f.as_str())) {
            return Err(CatalogError::Schema(format!("view {name} exposes {hidden}")));
        }
    }

    info!(
        views = schemas.len(),
        references = refs.len(),
        "View catalog validated"
    );
    Ok(())
}

fn collect_refs(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match (key.as_str(), child) {
                    ("$ref", Value::String(target)) => out.push(target.clone()),
                    _ => collect_refs(child, out),
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_refs(item, out)),
        _ => {}
    }
}

/// Property names declared directly by a schema, including its `allOf`
/// parts. References are not followed.
fn collect_properties(schema: &Value, out: &mut Vec<String>) {
    if let Some(props) = schema.get("properties").and_then(Value::as_object) {
        out.extend(props.keys().cloned());
    }
    if let Some(parts) = schema.get("allOf").and_then(Value::as_array) {
        for part in parts {
            collect_properties(part, out);
        }
    }
}

/// Property names of a registered component, following `allOf` references.
pub fn view_fields(name: &str) -> Result<Vec<String>, CatalogError> {
    let doc = catalog_document()?;
    let mut fields = Vec::new();
    resolve_fields(&doc, name, &mut fields)?;
    Ok(fields)
}

fn resolve_fields(doc: &Value, name: &str, out: &mut Vec<String>) -> Result<(), CatalogError> {
    let schema = doc
        .pointer(&format!("/components/schemas/{name}"))
        .ok_or_else(|| CatalogError::Schema(format!("unknown view {name}")))?;
    resolve_schema_fields(doc, schema, out)
}

fn resolve_schema_fields(
    doc: &Value,
    schema: &Value,
    out: &mut Vec<String>,
) -> Result<(), CatalogError> {
    if let Some(target) = schema.get("$ref").and_then(Value::as_str)
        && let Some(name) = target.strip_prefix(SCHEMA_REF_PREFIX)
    {
        return resolve_fields(doc, name, out);
    }
    if let Some(props) = schema.get("properties").and_then(Value::as_object) {
        out.extend(props.keys().cloned());
    }
    if let Some(parts) = schema.get("allOf").and_then(Value::as_array) {
        for part in parts {
            resolve_schema_fields(doc, part, out)?;
        }
    }
    Ok(())
}
