//! Record alias resolution and struct declaration rendering.
//!
//! The alias map owns every record type a module's methods can mention:
//! declared aliases are seeded up front and left unresolved until first
//! referenced; anonymous records discovered during translation are
//! registered under synthesized names. Each entry is rendered exactly once
//! into a `REACT_STRUCT` declaration after all methods have been
//! translated.

use indexmap::IndexMap;
use turbospec_schema::{AliasDef, ObjectField};

use super::types::{TypeMode, translate_type};
use super::ModuleContext;
use crate::error::CodegenError;

/// Insertion-ordered map from generated struct name to record entry.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    entries: IndexMap<String, AliasEntry>,
}

#[derive(Debug, Clone)]
struct AliasEntry {
    /// Source record shape, kept for structural matching.
    shape: Vec<ObjectField>,
    /// Rendered fields; `None` until the entry is first referenced or the
    /// struct block is generated.
    fields: Option<Vec<RenderedField>>,
}

#[derive(Debug, Clone)]
struct RenderedField {
    name: String,
    cpp_type: String,
}

impl AliasMap {
    /// Creates an alias map seeded with a module's declared aliases.
    ///
    /// # Errors
    /// Returns `CodegenError::AliasCollision` when two declared aliases with
    /// different shapes map to the same struct name.
    pub fn new(ctx: &ModuleContext, declared: &[AliasDef]) -> Result<Self, CodegenError> {
        let mut map = Self::default();
        for alias in declared {
            let name = ctx.struct_name(&alias.name);
            if let Some(existing) = map.entries.get(&name) {
                if existing.shape != alias.fields {
                    return Err(CodegenError::AliasCollision { name });
                }
                continue;
            }
            map.entries.insert(
                name,
                AliasEntry {
                    shape: alias.fields.clone(),
                    fields: None,
                },
            );
        }
        Ok(map)
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no aliases are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a reference to a declared alias, returning its generated
    /// struct name.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownAlias` when the module declares no
    /// alias with this name.
    pub fn resolve_reference(
        &mut self,
        ctx: &ModuleContext,
        alias_name: &str,
        referent: &str,
    ) -> Result<String, CodegenError> {
        let name = ctx.struct_name(alias_name);
        if !self.entries.contains_key(&name) {
            return Err(CodegenError::unknown_alias(alias_name, referent));
        }
        self.ensure_resolved(ctx, &name)?;
        Ok(name)
    }

    /// Registers an anonymous record under the given candidate name,
    /// returning the struct name to spell it as.
    ///
    /// A record structurally identical to an already-registered entry reuses
    /// that entry's name and registers nothing, so translating the same
    /// shape twice never grows the map.
    ///
    /// # Errors
    /// Returns `CodegenError::AliasCollision` when the candidate name is
    /// taken by a structurally different record.
    pub fn register(
        &mut self,
        ctx: &ModuleContext,
        candidate: String,
        shape: &[ObjectField],
    ) -> Result<String, CodegenError> {
        let existing = self
            .entries
            .iter()
            .find(|(_, entry)| entry.shape == shape)
            .map(|(name, _)| name.clone());
        if let Some(name) = existing {
            self.ensure_resolved(ctx, &name)?;
            return Ok(name);
        }
        if self.entries.contains_key(&candidate) {
            return Err(CodegenError::AliasCollision { name: candidate });
        }
        self.entries.insert(
            candidate.clone(),
            AliasEntry {
                shape: shape.to_vec(),
                fields: None,
            },
        );
        self.ensure_resolved(ctx, &candidate)?;
        Ok(candidate)
    }

    /// Translates an entry's fields if it has not been resolved yet.
    ///
    /// The entry is marked resolved before its fields are translated so
    /// records that reference themselves (directly or through another
    /// alias) terminate: re-entry only needs the name, which is already
    /// registered.
    fn ensure_resolved(&mut self, ctx: &ModuleContext, name: &str) -> Result<(), CodegenError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| CodegenError::generation(format!("unregistered alias '{name}'")))?;
        if entry.fields.is_some() {
            return Ok(());
        }
        entry.fields = Some(Vec::new());
        let shape = entry.shape.clone();

        let mut rendered = Vec::with_capacity(shape.len());
        for field in &shape {
            let (annotation, was_nullable) = field.annotation.unwrap_nullable();
            if was_nullable || field.optional {
                tracing::warn!(
                    alias = name,
                    field = %field.name,
                    "optionality is not propagated; generating the plain field type"
                );
            }
            let scope = format!("{name}_{}", field.name);
            let cpp_type = translate_type(annotation, self, ctx, &scope, TypeMode::Concrete)?;
            rendered.push(RenderedField {
                name: field.name.clone(),
                cpp_type,
            });
        }

        // Re-fetch: translation above may have inserted entries.
        if let Some(entry) = self.entries.get_mut(name) {
            entry.fields = Some(rendered);
        }
        Ok(())
    }

    /// Renders every registered alias into a struct declaration block, in
    /// insertion order.
    ///
    /// Declared aliases never referenced by a method are resolved here;
    /// resolution may append further nested entries, which are rendered in
    /// the same pass.
    ///
    /// # Errors
    /// Propagates translation errors from resolving pending entries.
    pub fn generate_structs(&mut self, ctx: &ModuleContext) -> Result<String, CodegenError> {
        let mut index = 0;
        while index < self.entries.len() {
            let name = self
                .entries
                .get_index(index)
                .map(|(name, _)| name.clone())
                .ok_or_else(|| CodegenError::generation("alias map index out of range"))?;
            self.ensure_resolved(ctx, &name)?;
            index += 1;
        }

        let mut output = String::new();
        for (name, entry) in &self.entries {
            output.push_str(&format!("REACT_STRUCT({name})\n"));
            output.push_str(&format!("struct {name} {{\n"));
            if let Some(fields) = &entry.fields {
                for field in fields {
                    output.push_str(&format!("    REACT_FIELD({})\n", field.name));
                    output.push_str(&format!("    {} {};\n", field.cpp_type, field.name));
                }
            }
            output.push_str("};\n\n");
        }
        Ok(output)
    }
}
