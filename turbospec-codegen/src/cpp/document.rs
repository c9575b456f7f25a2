//! Typed output document.
//!
//! All blocks (struct declarations, tuple entries, check entries) are
//! computed first; rendering is a pure formatting step over the finished
//! document, keeping the textual skeleton separate from the data decisions
//! made by the translator and renderer.

/// One module's generated spec header, pre-rendering.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    /// Enclosing C++ namespace, configured at generator construction.
    pub namespace: String,
    /// Preferred module name (prefix already stripped).
    pub preferred_name: String,
    /// Struct declarations block, one `REACT_STRUCT` per alias.
    pub structs_block: String,
    /// Registration tuple entries, one line per eligible method.
    pub tuple_entries: Vec<String>,
    /// Check entry blocks, one per eligible method.
    pub check_entries: Vec<String>,
}

impl SpecDocument {
    /// Name of the artifact this document renders into.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        format!("Native{}Spec.g.h", self.preferred_name)
    }

    /// Renders the complete header text.
    #[must_use]
    pub fn render(&self) -> String {
        let spec_name = format!("{}Spec", self.preferred_name);
        let tuple_block = self.tuple_entries.concat();
        let check_block = self.check_entries.join("\n");

        format!(
            "\
/*
 * This file is auto-generated from a NativeModule spec file.
 * Do not edit by hand.
 */
#pragma once

#include \"NativeModules.h\"
#include <tuple>

namespace {namespace} {{

{structs}struct {spec_name} : winrt::Microsoft::ReactNative::TurboModuleSpec {{
  static constexpr auto methods = std::tuple{{
{tuple_block}  }};

  template <class TModule>
  static constexpr void ValidateModule() noexcept {{
    constexpr auto methodCheckResults = CheckMethods<TModule, {spec_name}>();

{check_block}  }}
}};

}} // namespace {namespace}
",
            namespace = self.namespace,
            structs = self.structs_block,
        )
    }
}
