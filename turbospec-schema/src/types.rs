//! Schema type definitions.
//!
//! This module contains the data structures representing a parsed native
//! module schema: the document, module variants, method properties, and the
//! recursive type annotation sum.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Complete schema document: module name to module definition.
///
/// Iteration order is document insertion order; generation walks modules in
/// this order and emits one artifact per native module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Module definitions keyed by declared module name.
    pub modules: IndexMap<String, ModuleDef>,
}

impl SchemaDocument {
    /// Creates an empty schema document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module definition under the given name.
    pub fn add_module(&mut self, name: impl Into<String>, module: ModuleDef) {
        self.modules.insert(name.into(), module);
    }

    /// Looks up a module by name.
    #[must_use]
    pub fn get_module(&self, name: &str) -> Option<&ModuleDef> {
        self.modules.get(name)
    }

    /// Iterates over native modules only, in document order.
    pub fn native_modules(&self) -> impl Iterator<Item = (&str, &NativeModuleSpec)> {
        self.modules.iter().filter_map(|(name, def)| match def {
            ModuleDef::NativeModule(spec) => Some((name.as_str(), spec)),
            ModuleDef::Component(_) => None,
        })
    }
}

/// Module definition variants.
///
/// Only the native module variant carries method specs; component modules
/// are recognized so documents containing them parse, but generation skips
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ModuleDef {
    /// A native module with typed methods and declared record aliases.
    NativeModule(NativeModuleSpec),
    /// A component module (not processed by the generator).
    Component(ComponentSpec),
}

/// Spec body of a native module.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeModuleSpec {
    /// Record aliases declared by the module.
    #[serde(default)]
    pub aliases: Vec<AliasDef>,
    /// Ordered method properties.
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
}

/// Component module body. Opaque to the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentSpec {}

/// A declared record alias: a name bound to a field list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasDef {
    /// Declared alias name.
    pub name: String,
    /// Record fields.
    pub fields: Vec<ObjectField>,
}

/// A method property of a native module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    /// Method name, unique within the module.
    pub name: String,
    /// Type annotation: a function type, possibly behind a nullable wrapper.
    pub annotation: TypeAnnotation,
}

impl PropertyDef {
    /// Returns the function annotation of this property, unwrapping a single
    /// nullable wrapper.
    ///
    /// The boolean is true when a nullable wrapper was unwrapped, so callers
    /// can report the dropped optionality.
    ///
    /// # Errors
    /// Returns `SchemaError::NotAFunction` when the annotation is neither a
    /// function type nor a nullable-wrapped function type.
    pub fn function_type(&self) -> Result<(&FunctionAnnotation, bool), SchemaError> {
        match &self.annotation {
            TypeAnnotation::Function(func) => Ok((func, false)),
            TypeAnnotation::Nullable { inner } => match inner.as_ref() {
                TypeAnnotation::Function(func) => Ok((func, true)),
                _ => Err(SchemaError::not_a_function(&self.name)),
            },
            _ => Err(SchemaError::not_a_function(&self.name)),
        }
    }
}

/// Type annotation sum.
///
/// Closed: every schema type kind is a variant here and the generator
/// matches exhaustively, so adding a kind is a compile-time-checked change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeAnnotation {
    /// No value.
    Void,
    /// Boolean.
    Boolean,
    /// Double-precision number (the default numeric kind).
    Number,
    /// Single-precision number.
    Float,
    /// 32-bit integer.
    Int32,
    /// String.
    String,
    /// String literal; treated as a plain string by the generator.
    StringLiteral,
    /// Homogeneous array of an element type.
    Array {
        /// Element type.
        element_type: Box<TypeAnnotation>,
    },
    /// Anonymous record with named fields.
    Object {
        /// Record fields.
        properties: Vec<ObjectField>,
    },
    /// Asynchronous result of an inner type.
    Promise {
        /// Resolved value type.
        element_type: Box<TypeAnnotation>,
    },
    /// Nullable wrapper around an inner type.
    Nullable {
        /// Wrapped type.
        inner: Box<TypeAnnotation>,
    },
    /// Function type: parameters and return type.
    Function(Box<FunctionAnnotation>),
    /// Reference to a declared record alias.
    TypeAlias {
        /// Declared alias name.
        name: String,
    },
}

impl TypeAnnotation {
    /// Strips any nullable wrappers, returning the innermost annotation and
    /// whether at least one wrapper was removed.
    #[must_use]
    pub fn unwrap_nullable(&self) -> (&Self, bool) {
        let mut current = self;
        let mut was_nullable = false;
        while let Self::Nullable { inner } = current {
            current = inner;
            was_nullable = true;
        }
        (current, was_nullable)
    }
}

/// A named record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectField {
    /// Field name.
    pub name: String,
    /// Whether the field is optional. Optionality is currently dropped
    /// during generation (see the codegen crate).
    #[serde(default)]
    pub optional: bool,
    /// Field type.
    pub annotation: TypeAnnotation,
}

/// Function shape: ordered parameters and a return type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionAnnotation {
    /// Ordered parameters.
    #[serde(default)]
    pub params: Vec<Param>,
    /// Return type annotation.
    pub return_type: TypeAnnotation,
}

/// A named function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub annotation: TypeAnnotation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn getter(return_type: TypeAnnotation) -> PropertyDef {
        PropertyDef {
            name: "getValue".to_string(),
            annotation: TypeAnnotation::Function(Box::new(FunctionAnnotation {
                params: Vec::new(),
                return_type,
            })),
        }
    }

    #[test]
    fn test_function_type_direct() {
        let prop = getter(TypeAnnotation::Number);
        let (func, was_nullable) = prop.function_type().expect("function shape");
        assert_eq!(func.return_type, TypeAnnotation::Number);
        assert!(!was_nullable);
    }

    #[test]
    fn test_function_type_nullable_wrapped() {
        let inner = getter(TypeAnnotation::Void).annotation;
        let prop = PropertyDef {
            name: "maybe".to_string(),
            annotation: TypeAnnotation::Nullable {
                inner: Box::new(inner),
            },
        };
        let (_, was_nullable) = prop.function_type().expect("function shape");
        assert!(was_nullable);
    }

    #[test]
    fn test_function_type_mismatch() {
        let prop = PropertyDef {
            name: "notAMethod".to_string(),
            annotation: TypeAnnotation::Number,
        };
        assert!(prop.function_type().is_err());
    }

    #[test]
    fn test_unwrap_nullable_nested() {
        let annotation = TypeAnnotation::Nullable {
            inner: Box::new(TypeAnnotation::Nullable {
                inner: Box::new(TypeAnnotation::String),
            }),
        };
        let (inner, was_nullable) = annotation.unwrap_nullable();
        assert_eq!(*inner, TypeAnnotation::String);
        assert!(was_nullable);
    }

    #[test]
    fn test_native_modules_filters_components() {
        let mut document = SchemaDocument::new();
        document.add_module(
            "NativeFoo",
            ModuleDef::NativeModule(NativeModuleSpec::default()),
        );
        document.add_module("FancyView", ModuleDef::Component(ComponentSpec::default()));

        let names: Vec<&str> = document.native_modules().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["NativeFoo"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let mut document = SchemaDocument::new();
        for name in ["NativeB", "NativeA", "NativeC"] {
            document.add_module(name, ModuleDef::NativeModule(NativeModuleSpec::default()));
        }
        let names: Vec<&str> = document.modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["NativeB", "NativeA", "NativeC"]);
    }
}
