//! # TurboSpec Codegen
//!
//! C++ TurboModule spec header generation from native module schemas.
//!
//! This crate provides:
//! - Type translation from schema annotations to C++ spellings
//! - Record alias resolution and struct generation
//! - Method signature, registration tuple, and check entry rendering
//! - Per-module spec header assembly

pub mod cpp;
pub mod error;
pub mod generator;

pub use error::CodegenError;
pub use generator::{DEFAULT_NAMESPACE, Generator};

use indexmap::IndexMap;

/// Generates spec headers from a JSON schema document string.
///
/// # Arguments
/// * `json` - Schema document content
/// * `namespace` - Enclosing C++ namespace for generated headers
///
/// # Returns
/// Generated headers keyed by artifact name, in schema module order.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(
    json: &str,
    namespace: &str,
) -> Result<IndexMap<String, String>, CodegenError> {
    let document = turbospec_schema::parse_schema(json)?;
    turbospec_schema::validate_schema(&document)?;
    let generator = Generator::new(namespace);
    generator.generate(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_json_end_to_end() {
        let json = r#"{
            "modules": {
                "NativeCalculator": {
                    "kind": "nativeModule",
                    "properties": [
                        {
                            "name": "add",
                            "annotation": {
                                "kind": "function",
                                "params": [
                                    {"name": "a", "annotation": {"kind": "number"}},
                                    {"name": "b", "annotation": {"kind": "number"}}
                                ],
                                "returnType": {"kind": "number"}
                            }
                        }
                    ]
                }
            }
        }"#;

        let outputs = generate_from_json(json, "Microsoft::ReactNativeSpecs").unwrap();
        assert_eq!(outputs.len(), 1);
        let rendered = &outputs["NativeCalculatorSpec.g.h"];
        assert!(rendered.contains("struct CalculatorSpec"));
        assert!(rendered.contains("SyncMethod<double(double, double) noexcept>{0, L\"add\"},"));
        assert!(
            rendered.contains("double add(double a, double b) noexcept { /* implementation */ }")
        );
    }

    #[test]
    fn test_generate_from_json_rejects_invalid_document() {
        let json = r#"{
            "modules": {
                "NativeFoo": {
                    "kind": "nativeModule",
                    "properties": [
                        {"name": "dup", "annotation": {"kind": "function", "returnType": {"kind": "void"}}},
                        {"name": "dup", "annotation": {"kind": "function", "returnType": {"kind": "void"}}}
                    ]
                }
            }
        }"#;

        let err = generate_from_json(json, "Specs").unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }
}
