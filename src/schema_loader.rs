//! Shared JSON Schema loading for the content files.
//!
//! This keeps catalog, testimonial, and skill schema handling aligned:
//! callers resolve the schema that ships next to their content file, enforce
//! the `schema_version` const against an allowed set, and validate the raw
//! JSON before any deserialization happens.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
    #[allow(dead_code)]
    raw: Arc<Value>,
}

pub(crate) fn load_json_schema(
    path: &Path,
    allowed_versions: Option<&BTreeSet<String>>,
) -> Result<SchemaLoadResult> {
    let schema_value: Value = serde_json::from_reader(BufReader::new(
        File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
    ))
    .with_context(|| format!("parsing schema {}", path.display()))?;

    let schema_version = schema_const_version(&schema_value)
        .ok_or_else(|| anyhow!("schema {} missing schema_version const", path.display()))?;

    if let Some(allowed) = allowed_versions {
        if !allowed.contains(&schema_version) {
            bail!(
                "schema_version '{}' not in allowed set {:?}",
                schema_version,
                allowed
            );
        }
    }

    // The compiled validator borrows the schema value; the Arc kept in the
    // result must outlive it.
    let raw = Arc::new(schema_value);
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
    let compiled = JSONSchema::compile(raw_static)
        .with_context(|| format!("compiling schema {}", path.display()))?;

    Ok(SchemaLoadResult {
        schema_version,
        compiled,
        raw,
    })
}

/// Validate a content file against the schema shipped alongside it.
///
/// The schema is resolved relative to the content file first (so fixture
/// trees carry their own copies), falling back to the canonical copy baked in
/// at build time. Validation failures list every schema error, not just the
/// first, because content fixes usually batch.
pub(crate) fn validate_content_against_schema(
    content_path: &Path,
    schema_file: &str,
    default_version: &str,
) -> Result<()> {
    let content_handle = File::open(content_path)
        .with_context(|| format!("opening content {}", content_path.display()))?;
    let content_value: Value = serde_json::from_reader(BufReader::new(content_handle))
        .with_context(|| format!("parsing content {}", content_path.display()))?;

    let schema_path = resolve_schema_path(content_path, schema_file);
    let allowed = allowed_versions(schema_file, default_version);
    let schema = load_json_schema(&schema_path, Some(&allowed))
        .with_context(|| format!("loading schema {}", schema_path.display()))?;

    let declared = content_value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if declared != schema.schema_version {
        bail!(
            "content {} declares schema_version '{}', expected '{}'",
            content_path.display(),
            declared,
            schema.schema_version
        );
    }

    if let Err(errors) = schema.compiled.validate(&content_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "content {} failed schema validation:\n{}",
            content_path.display(),
            details
        );
    }
    Ok(())
}

/// Allowed `schema_version` values for a content kind.
///
/// Read from the canonical schema on disk so content and schema cannot drift;
/// the compiled-in default only applies when the canonical copy is missing.
pub(crate) fn allowed_versions(schema_file: &str, default_version: &str) -> BTreeSet<String> {
    let version =
        schema_version_from_disk(&canonical_schema_path(schema_file))
            .unwrap_or_else(|| default_version.to_string());
    BTreeSet::from_iter([version])
}

pub(crate) fn resolve_schema_path(content_path: &Path, schema_file: &str) -> PathBuf {
    if let Some(base) = content_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join("schema").join(schema_file);
        if candidate.exists() {
            return candidate;
        }
    }

    canonical_schema_path(schema_file)
}

fn canonical_schema_path(schema_file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("schema")
        .join(schema_file)
}

fn schema_version_from_disk(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).ok()?;
    schema_const_version(&value)
}

fn schema_const_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
