//! Field-list files (JSON or TOML).
//!
//! JSON accepts a bare array of rows or `{"fields": [...]}`. TOML uses
//! `[[fields]]` tables.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CodegenError, Result};
use crate::ir::FieldDescriptor;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonFieldList {
    Bare(Vec<FieldDescriptor>),
    Wrapped { fields: Vec<FieldDescriptor> },
}

#[derive(Deserialize)]
struct TomlFieldList {
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

pub fn parse_json(input: &str) -> Result<Vec<FieldDescriptor>> {
    let list: JsonFieldList = serde_json::from_str(input)?;
    Ok(match list {
        JsonFieldList::Bare(fields) => fields,
        JsonFieldList::Wrapped { fields } => fields,
    })
}

pub fn parse_toml(input: &str) -> Result<Vec<FieldDescriptor>> {
    let list: TomlFieldList = toml::from_str(input)?;
    Ok(list.fields)
}

/// Load a field list, picking the parser from the file extension.
pub fn load(path: &Path) -> Result<Vec<FieldDescriptor>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let content = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let fields = match ext.as_str() {
        "json" => parse_json(&content)?,
        "toml" => parse_toml(&content)?,
        _ => return Err(CodegenError::UnsupportedFormat(path.display().to_string())),
    };

    debug!(path = %path.display(), count = fields.len(), "loaded field list");
    Ok(fields)
}
