//! Error types for schema loading and validation.

use thiserror::Error;

/// Error type for schema document loading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Loading error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A property whose annotation is not a function type.
    #[error("property '{property}' is not a method: expected a function annotation")]
    NotAFunction {
        /// Property name.
        property: String,
    },

    /// Duplicate property name within one module.
    #[error("duplicate property '{name}' in module '{module}'")]
    DuplicateProperty {
        /// Module name.
        module: String,
        /// Property name.
        name: String,
    },

    /// Duplicate alias name within one module.
    #[error("duplicate alias '{name}' in module '{module}'")]
    DuplicateAlias {
        /// Module name.
        module: String,
        /// Alias name.
        name: String,
    },
}

impl SchemaError {
    /// Creates a not-a-function error for the given property.
    pub fn not_a_function(property: impl Into<String>) -> Self {
        Self::NotAFunction {
            property: property.into(),
        }
    }

    /// Creates a duplicate property error.
    pub fn duplicate_property(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateProperty {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Creates a duplicate alias error.
    pub fn duplicate_alias(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateAlias {
            module: module.into(),
            name: name.into(),
        }
    }
}
