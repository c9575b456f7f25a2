//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] turbospec_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] turbospec_schema::SchemaError),

    /// A type annotation the generator cannot spell in the target language.
    #[error("unsupported type annotation in '{context}': {message}")]
    UnsupportedType {
        /// Naming context in which the annotation appeared.
        context: String,
        /// Description of the unsupported shape.
        message: String,
    },

    /// Two distinct record shapes mapped to the same generated struct name.
    #[error("alias collision: '{name}' already names a structurally different record")]
    AliasCollision {
        /// Colliding struct name.
        name: String,
    },

    /// A type alias reference with no declaration in the module.
    #[error("unknown alias '{name}' referenced in '{context}'")]
    UnknownAlias {
        /// Referenced alias name.
        name: String,
        /// Naming context of the reference.
        context: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedType {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown alias error.
    pub fn unknown_alias(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownAlias {
            name: name.into(),
            context: context.into(),
        }
    }

    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
