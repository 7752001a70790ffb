//! # Schema Reader
//!
//! Loads the schema definition (plain SQL DDL) that grounds every prompt.
//! The text is treated as an opaque string and is never parsed.

use crate::errors::PromptError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the full content of the schema file at `path`.
///
/// Fails with [`PromptError::SchemaRead`] if the file is missing or unreadable,
/// and with [`PromptError::EmptySchema`] if it contains only whitespace.
pub fn read_schema(path: &Path) -> Result<String, PromptError> {
    let schema = fs::read_to_string(path).map_err(|source| PromptError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;

    if schema.trim().is_empty() {
        return Err(PromptError::EmptySchema(path.to_path_buf()));
    }

    debug!(path = %path.display(), bytes = schema.len(), "Loaded schema file");
    Ok(schema)
}
