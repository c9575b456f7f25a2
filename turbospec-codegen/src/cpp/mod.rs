//! C++ spec header generation modules.

pub mod aliases;
pub mod document;
pub mod methods;
pub mod types;

pub use aliases::AliasMap;
pub use document::SpecDocument;
pub use methods::{MethodEntry, render_method};
pub use types::{TypeMode, translate_type};

/// Per-module naming context.
///
/// Carries the preferred module name every alias and artifact name is
/// derived from. Threaded explicitly through translation so no state is
/// shared between modules.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    preferred_name: String,
}

impl ModuleContext {
    /// Recognized module name prefix, stripped when deriving the preferred
    /// name.
    pub const MODULE_PREFIX: &'static str = "Native";

    /// Creates a context for the given declared module name.
    #[must_use]
    pub fn new(module_name: &str) -> Self {
        let preferred_name = module_name
            .strip_prefix(Self::MODULE_PREFIX)
            .filter(|stripped| !stripped.is_empty())
            .unwrap_or(module_name);
        Self {
            preferred_name: preferred_name.to_string(),
        }
    }

    /// Preferred module name (declared name minus the recognized prefix).
    #[must_use]
    pub fn preferred_name(&self) -> &str {
        &self.preferred_name
    }

    /// Name of the generated spec struct.
    #[must_use]
    pub fn spec_name(&self) -> String {
        format!("{}Spec", self.preferred_name)
    }

    /// Name of the generated artifact.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        format!("Native{}Spec.g.h", self.preferred_name)
    }

    /// Name of a generated record struct scoped to this module.
    #[must_use]
    pub fn struct_name(&self, suffix: &str) -> String {
        format!("{}_{}", self.spec_name(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_stripped() {
        let ctx = ModuleContext::new("NativeDeviceInfo");
        assert_eq!(ctx.preferred_name(), "DeviceInfo");
        assert_eq!(ctx.spec_name(), "DeviceInfoSpec");
        assert_eq!(ctx.artifact_name(), "NativeDeviceInfoSpec.g.h");
    }

    #[test]
    fn test_unprefixed_name_unchanged() {
        let ctx = ModuleContext::new("Clipboard");
        assert_eq!(ctx.preferred_name(), "Clipboard");
        assert_eq!(ctx.artifact_name(), "NativeClipboardSpec.g.h");
    }

    #[test]
    fn test_prefix_only_name_kept() {
        // "Native" alone would strip to nothing; keep the declared name.
        let ctx = ModuleContext::new("Native");
        assert_eq!(ctx.preferred_name(), "Native");
    }

    #[test]
    fn test_struct_name() {
        let ctx = ModuleContext::new("NativeFoo");
        assert_eq!(ctx.struct_name("Options"), "FooSpec_Options");
    }
}
