//! # TurboSpec Schema
//!
//! Native module schema model and JSON loader.
//!
//! This crate provides:
//! - Data structures for language-neutral native module schemas
//! - JSON deserialization of schema documents
//! - Schema validation (duplicate names, method shapes)

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_schema, parse_schema_file};
pub use types::{
    AliasDef, ComponentSpec, FunctionAnnotation, ModuleDef, NativeModuleSpec, ObjectField, Param,
    PropertyDef, SchemaDocument, TypeAnnotation,
};
pub use validation::validate_schema;
