//! Schema document loading.
//!
//! Schema documents arrive as JSON produced by an external frontend; this
//! module deserializes them into the in-memory model consumed by the
//! generator.

use crate::error::ParseError;
use crate::types::SchemaDocument;

/// Parses a schema document from a JSON string.
///
/// # Arguments
/// * `json` - Schema document content
///
/// # Returns
/// The parsed schema document.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or does not match the
/// schema model.
pub fn parse_schema(json: &str) -> Result<SchemaDocument, ParseError> {
    let document: SchemaDocument = serde_json::from_str(json)?;
    Ok(document)
}

/// Parses a schema document from a JSON file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_schema_file(path: &std::path::Path) -> Result<SchemaDocument, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
