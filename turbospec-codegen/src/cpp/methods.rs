//! Method signature rendering.
//!
//! For one method property this produces the two candidate concrete
//! signatures (instance and static), the `Method`/`SyncMethod` tuple entry
//! binding the method to its dispatch slot, and the
//! `REACT_SHOW_METHOD_SPEC_ERRORS` check entry that surfaces the candidate
//! signatures as compile-time mismatch diagnostics.

use turbospec_schema::{PropertyDef, TypeAnnotation};

use super::ModuleContext;
use super::aliases::AliasMap;
use super::types::{TypeMode, translate_type};
use crate::error::CodegenError;

/// Rendered output for one method.
#[derive(Debug, Clone)]
pub struct MethodEntry {
    /// Candidate concrete signatures: instance form, then static form.
    pub candidate_signatures: Vec<String>,
    /// Tuple entry line for the `methods` registration tuple.
    pub tuple_entry: String,
    /// Check entry block for `ValidateModule`.
    pub check_entry: String,
}

enum MethodKind {
    /// Returns a value synchronously.
    Sync,
    /// Completes through the runtime; promise methods carry a result
    /// channel parameter, void methods do not.
    Async { result_channel: Option<String> },
}

/// Renders one method property at the given registration index.
///
/// A nullable wrapper around the method's function type is unwrapped with a
/// warning; optionality is not reflected in the output.
///
/// # Errors
/// Returns `CodegenError` when the property is not function-shaped or a
/// parameter/return type cannot be translated.
pub fn render_method(
    index: usize,
    property: &PropertyDef,
    aliases: &mut AliasMap,
    ctx: &ModuleContext,
) -> Result<MethodEntry, CodegenError> {
    let (func, was_nullable) = property.function_type()?;
    if was_nullable {
        tracing::warn!(
            method = %property.name,
            "optional method annotation is not propagated; generating a plain method"
        );
    }
    let name = &property.name;

    let mut concrete_params = Vec::with_capacity(func.params.len() + 1);
    let mut abstract_params = Vec::with_capacity(func.params.len());
    for param in &func.params {
        let scope = ctx.struct_name(&format!("{name}_{}", param.name));
        let concrete = translate_type(&param.annotation, aliases, ctx, &scope, TypeMode::Concrete)?;
        let abstract_ = translate_type(&param.annotation, aliases, ctx, &scope, TypeMode::Check)?;
        concrete_params.push(format!("{concrete} {}", param.name));
        abstract_params.push(abstract_);
    }

    let return_scope = ctx.struct_name(&format!("{name}_returnType"));
    let (return_annotation, _) = func.return_type.unwrap_nullable();
    let kind = match return_annotation {
        TypeAnnotation::Promise { .. } => {
            let channel =
                translate_type(return_annotation, aliases, ctx, &return_scope, TypeMode::Concrete)?;
            MethodKind::Async {
                result_channel: Some(channel),
            }
        }
        TypeAnnotation::Void => MethodKind::Async {
            result_channel: None,
        },
        _ => MethodKind::Sync,
    };

    let (macro_name, concrete_return, abstract_return) = match &kind {
        MethodKind::Sync => {
            let concrete =
                translate_type(return_annotation, aliases, ctx, &return_scope, TypeMode::Concrete)?;
            let abstract_ =
                translate_type(return_annotation, aliases, ctx, &return_scope, TypeMode::Check)?;
            ("REACT_SYNC_METHOD", concrete, abstract_)
        }
        MethodKind::Async { result_channel } => {
            if let Some(channel) = result_channel {
                concrete_params.push(format!("{channel} &&result"));
            }
            ("REACT_METHOD", "void".to_string(), "void".to_string())
        }
    };

    let concrete_params = concrete_params.join(", ");
    let abstract_params = abstract_params.join(", ");

    let candidate_signatures: Vec<String> = ["", "static "]
        .iter()
        .map(|qualifier| {
            format!(
                "{macro_name}({name}) {qualifier}{concrete_return} {name}({concrete_params}) noexcept {{ /* implementation */ }}"
            )
        })
        .collect();

    let tuple_variant = match kind {
        MethodKind::Sync => "SyncMethod",
        MethodKind::Async { .. } => "Method",
    };
    let tuple_entry = format!(
        "      {tuple_variant}<{abstract_return}({abstract_params}) noexcept>{{{index}, L\"{name}\"}},\n"
    );

    let mut check_entry = format!(
        "    REACT_SHOW_METHOD_SPEC_ERRORS(\n          {index},\n          \"{name}\",\n"
    );
    for signature in &candidate_signatures {
        check_entry.push_str(&format!("          \"    {signature}\\n\"\n"));
    }
    // Close the macro call after the last signature line.
    let closed = check_entry.trim_end_matches('\n').to_string();
    let check_entry = format!("{closed});\n");

    Ok(MethodEntry {
        candidate_signatures,
        tuple_entry,
        check_entry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbospec_schema::{FunctionAnnotation, ObjectField, Param};

    fn ctx() -> ModuleContext {
        ModuleContext::new("NativeFoo")
    }

    fn property(name: &str, params: Vec<Param>, return_type: TypeAnnotation) -> PropertyDef {
        PropertyDef {
            name: name.to_string(),
            annotation: TypeAnnotation::Function(Box::new(FunctionAnnotation {
                params,
                return_type,
            })),
        }
    }

    fn render(property: &PropertyDef) -> MethodEntry {
        let mut aliases = AliasMap::new(&ctx(), &[]).unwrap();
        render_method(0, property, &mut aliases, &ctx()).unwrap()
    }

    #[test]
    fn test_sync_method() {
        let prop = property("getValue", Vec::new(), TypeAnnotation::Number);
        let entry = render(&prop);

        assert_eq!(
            entry.tuple_entry,
            "      SyncMethod<double() noexcept>{0, L\"getValue\"},\n"
        );
        assert_eq!(entry.candidate_signatures.len(), 2);
        assert!(
            entry.candidate_signatures[0]
                .starts_with("REACT_SYNC_METHOD(getValue) double getValue()")
        );
        assert!(
            entry.candidate_signatures[1]
                .starts_with("REACT_SYNC_METHOD(getValue) static double getValue()")
        );
    }

    #[test]
    fn test_candidates_differ_only_in_static_qualifier() {
        let prop = property(
            "setValue",
            vec![Param {
                name: "x".to_string(),
                annotation: TypeAnnotation::Number,
            }],
            TypeAnnotation::Void,
        );
        let entry = render(&prop);
        let with_static = entry.candidate_signatures[0]
            .replace("setValue) void", "setValue) static void");
        assert_eq!(with_static, entry.candidate_signatures[1]);
    }

    #[test]
    fn test_void_method_has_no_result_channel() {
        let prop = property("notify", Vec::new(), TypeAnnotation::Void);
        let entry = render(&prop);

        assert!(entry.tuple_entry.contains("Method<void() noexcept>"));
        assert!(entry.candidate_signatures[0].contains("void notify() noexcept"));
        assert!(!entry.candidate_signatures[0].contains("ReactPromise"));
    }

    #[test]
    fn test_promise_method_appends_result_channel() {
        let prop = property(
            "doAsync",
            vec![Param {
                name: "x".to_string(),
                annotation: TypeAnnotation::Number,
            }],
            TypeAnnotation::Promise {
                element_type: Box::new(TypeAnnotation::String),
            },
        );
        let entry = render(&prop);

        // Concrete argument list is one longer than the abstract one; the
        // promise's inner type never appears in return position.
        assert!(entry.candidate_signatures[0].contains(
            "void doAsync(double x, ::React::ReactPromise<std::string> &&result) noexcept"
        ));
        assert!(
            entry.tuple_entry.contains("Method<void(double) noexcept>"),
            "tuple entry was: {}",
            entry.tuple_entry
        );
    }

    #[test]
    fn test_record_param_resolves_through_alias_map() {
        let ctx = ctx();
        let mut aliases = AliasMap::new(&ctx, &[]).unwrap();
        let prop = property(
            "configure",
            vec![Param {
                name: "options".to_string(),
                annotation: TypeAnnotation::Object {
                    properties: vec![ObjectField {
                        name: "a".to_string(),
                        optional: false,
                        annotation: TypeAnnotation::Number,
                    }],
                },
            }],
            TypeAnnotation::Void,
        );
        let entry = render_method(0, &prop, &mut aliases, &ctx).unwrap();

        assert_eq!(aliases.len(), 1);
        assert!(
            entry.candidate_signatures[0]
                .contains("configure(FooSpec_configure_options options)")
        );
        assert!(
            entry
                .tuple_entry
                .contains("Method<void(FooSpec_configure_options) noexcept>")
        );
    }

    #[test]
    fn test_check_entry_shape() {
        let prop = property("getValue", Vec::new(), TypeAnnotation::Number);
        let entry = render(&prop);

        assert!(entry.check_entry.starts_with(
            "    REACT_SHOW_METHOD_SPEC_ERRORS(\n          0,\n          \"getValue\",\n"
        ));
        assert!(entry.check_entry.ends_with("\\n\");\n"));
        for signature in &entry.candidate_signatures {
            assert!(entry.check_entry.contains(signature.as_str()));
        }
    }

    #[test]
    fn test_nullable_method_annotation_unwrapped() {
        let inner = property("maybe", Vec::new(), TypeAnnotation::Void).annotation;
        let prop = PropertyDef {
            name: "maybe".to_string(),
            annotation: TypeAnnotation::Nullable {
                inner: Box::new(inner),
            },
        };
        let entry = render(&prop);
        assert!(entry.tuple_entry.contains("L\"maybe\""));
    }

    #[test]
    fn test_non_function_property_fails() {
        let prop = PropertyDef {
            name: "broken".to_string(),
            annotation: TypeAnnotation::Number,
        };
        let mut aliases = AliasMap::new(&ctx(), &[]).unwrap();
        let err = render_method(0, &prop, &mut aliases, &ctx()).unwrap_err();
        assert!(matches!(err, CodegenError::Schema(_)));
    }
}
