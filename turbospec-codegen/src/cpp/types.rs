//! Type annotation translation.
//!
//! Maps schema type annotations to C++ spellings. Two modes exist: the
//! concrete mode used in candidate method signatures and struct fields, and
//! the check mode used in the `Method`/`SyncMethod` tuple descriptors. The
//! spellings coincide for most kinds; promises differ (`::React::ReactPromise`
//! versus the `Promise` template the spec checker understands).

use turbospec_schema::TypeAnnotation;

use super::ModuleContext;
use super::aliases::AliasMap;
use crate::error::CodegenError;

/// Translation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMode {
    /// Spelling for concrete signatures and struct fields.
    Concrete,
    /// Spelling for abstract check descriptors.
    Check,
}

/// Translates a type annotation to its C++ spelling.
///
/// Record annotations resolve through the alias map: a structurally known
/// record reuses its registered struct name, a new one is registered under
/// a name derived from `scope` (the naming context of the position being
/// translated). Translating the same annotation twice therefore yields the
/// same spelling without growing the map.
///
/// Nullable wrappers are dropped with a warning; optionality is not yet
/// propagated into generated headers.
///
/// # Errors
/// Returns `CodegenError` on function-typed value positions and unknown
/// alias references.
pub fn translate_type(
    annotation: &TypeAnnotation,
    aliases: &mut AliasMap,
    ctx: &ModuleContext,
    scope: &str,
    mode: TypeMode,
) -> Result<String, CodegenError> {
    match annotation {
        TypeAnnotation::Void => Ok("void".to_string()),
        TypeAnnotation::Boolean => Ok("bool".to_string()),
        TypeAnnotation::Number => Ok("double".to_string()),
        TypeAnnotation::Float => Ok("float".to_string()),
        TypeAnnotation::Int32 => Ok("int".to_string()),
        TypeAnnotation::String | TypeAnnotation::StringLiteral => Ok("std::string".to_string()),
        TypeAnnotation::Array { element_type } => {
            let element = translate_type(element_type, aliases, ctx, scope, mode)?;
            Ok(format!("std::vector<{element}>"))
        }
        TypeAnnotation::Object { properties } => {
            aliases.register(ctx, scope.to_string(), properties)
        }
        TypeAnnotation::TypeAlias { name } => aliases.resolve_reference(ctx, name, scope),
        TypeAnnotation::Promise { element_type } => {
            let inner = translate_type(element_type, aliases, ctx, scope, mode)?;
            Ok(match mode {
                TypeMode::Concrete => format!("::React::ReactPromise<{inner}>"),
                TypeMode::Check => format!("Promise<{inner}>"),
            })
        }
        TypeAnnotation::Nullable { inner } => {
            tracing::warn!(
                scope,
                "optionality is not propagated; generating the plain inner type"
            );
            translate_type(inner, aliases, ctx, scope, mode)
        }
        TypeAnnotation::Function(_) => Err(CodegenError::unsupported(
            scope,
            "function types are only supported as method annotations",
        )),
    }
}
