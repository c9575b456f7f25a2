//! Schema validation utilities.
//!
//! The generator itself assumes well-formed input; callers that want
//! up-front diagnostics can validate a document before generating.

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::types::SchemaDocument;

/// Validates a schema document for generation.
///
/// Checks, per native module: property names are unique, alias names are
/// unique, and every property is function-shaped (directly or behind one
/// nullable wrapper).
///
/// # Errors
/// Returns `SchemaError` describing the first violation found.
pub fn validate_schema(document: &SchemaDocument) -> Result<(), SchemaError> {
    for (module_name, spec) in document.native_modules() {
        let mut seen_properties = HashSet::new();
        for property in &spec.properties {
            if !seen_properties.insert(property.name.as_str()) {
                return Err(SchemaError::duplicate_property(module_name, &property.name));
            }
            property.function_type()?;
        }

        let mut seen_aliases = HashSet::new();
        for alias in &spec.aliases {
            if !seen_aliases.insert(alias.name.as_str()) {
                return Err(SchemaError::duplicate_alias(module_name, &alias.name));
            }
        }
    }
    Ok(())
}
