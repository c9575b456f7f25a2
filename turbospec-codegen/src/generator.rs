//! Module emitter.
//!
//! Walks the schema document in order, drives alias resolution and method
//! rendering for each native module, and assembles one spec header per
//! module.

use indexmap::IndexMap;
use turbospec_schema::{ModuleDef, NativeModuleSpec, SchemaDocument};

use crate::cpp::{AliasMap, ModuleContext, SpecDocument, render_method};
use crate::error::CodegenError;

/// Default enclosing namespace for generated headers.
pub const DEFAULT_NAMESPACE: &str = "Microsoft::ReactNativeSpecs";

/// Constants accessor; constants codegen is not implemented, so this
/// property is excluded from registration entirely.
const GET_CONSTANTS: &str = "getConstants";

/// Spec header generator.
#[derive(Debug, Clone)]
pub struct Generator {
    namespace: String,
}

impl Generator {
    /// Creates a generator emitting into the given C++ namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Generates spec headers for every native module in the document.
    ///
    /// The returned map is keyed by artifact name (`Native{X}Spec.g.h`) in
    /// schema module order. Modules of other variants are skipped.
    ///
    /// # Errors
    /// Returns `CodegenError` when a module's methods cannot be translated;
    /// the whole pass fails rather than emitting malformed text.
    pub fn generate(
        &self,
        document: &SchemaDocument,
    ) -> Result<IndexMap<String, String>, CodegenError> {
        let mut outputs = IndexMap::new();
        for (module_name, module) in &document.modules {
            match module {
                ModuleDef::NativeModule(spec) => {
                    let ctx = ModuleContext::new(module_name);
                    tracing::info!(
                        module = %module_name,
                        artifact = %ctx.artifact_name(),
                        "generating spec header"
                    );
                    let rendered = self.generate_module(&ctx, spec)?;
                    outputs.insert(ctx.artifact_name(), rendered);
                }
                ModuleDef::Component(_) => {
                    tracing::debug!(module = %module_name, "skipping non-native module");
                }
            }
        }
        Ok(outputs)
    }

    /// Generates the header text for one native module.
    fn generate_module(
        &self,
        ctx: &ModuleContext,
        spec: &NativeModuleSpec,
    ) -> Result<String, CodegenError> {
        let mut aliases = AliasMap::new(ctx, &spec.aliases)?;

        let mut tuple_entries = Vec::new();
        let mut check_entries = Vec::new();
        let mut index = 0;
        for property in &spec.properties {
            if property.name == GET_CONSTANTS {
                tracing::warn!(
                    module = %ctx.preferred_name(),
                    "constants codegen is not implemented; skipping getConstants"
                );
                continue;
            }
            let entry = render_method(index, property, &mut aliases, ctx)?;
            tuple_entries.push(entry.tuple_entry);
            check_entries.push(entry.check_entry);
            index += 1;
        }

        // Struct rendering runs last: method translation above may still
        // have been appending aliases.
        let structs_block = aliases.generate_structs(ctx)?;

        let document = SpecDocument {
            namespace: self.namespace.clone(),
            preferred_name: ctx.preferred_name().to_string(),
            structs_block,
            tuple_entries,
            check_entries,
        };
        Ok(document.render())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
