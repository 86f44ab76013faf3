//! Resolved-script metadata.
//!
//! Attached to a descriptor after its script block has been compiled. The
//! compile step prunes imports the template does not use, so the retained
//! import set depends on template shape - which is why a pure template edit
//! can still force a script recompile. [`ResolvedScript::forces_reload`]
//! encodes that coupling.

use regex::Regex;
use rustc_hash::FxHashMap;

use super::Descriptor;

/// One import recorded by the script compile step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Module specifier the symbol was imported from.
    pub source: String,
    /// Whether template usage analysis kept this import alive.
    pub used_in_template: bool,
}

impl ImportBinding {
    pub fn new(source: impl Into<String>, used_in_template: bool) -> Self {
        Self {
            source: source.into(),
            used_in_template,
        }
    }
}

/// Metadata produced by compiling a descriptor's script block.
///
/// Stored in the [`DescriptorCache`](crate::DescriptorCache) keyed by
/// descriptor identity, and deliberately readable across two descriptor
/// generations: the previous parse's metadata is evaluated against the new
/// parse's template to decide whether pruning decisions went stale.
#[derive(Debug, Clone, Default)]
pub struct ResolvedScript {
    /// Imported symbol -> binding info. `None` when the compile step did not
    /// record import usage (pruning disabled for this script variant).
    pub imports: Option<FxHashMap<String, ImportBinding>>,
}

impl ResolvedScript {
    /// Metadata for a compile that performed no import pruning.
    pub fn without_imports() -> Self {
        Self::default()
    }

    /// Metadata carrying the retained-import map.
    pub fn with_imports(imports: FxHashMap<String, ImportBinding>) -> Self {
        Self {
            imports: Some(imports),
        }
    }

    /// Whether the compile step recorded an import map at all.
    ///
    /// An empty recorded map still counts: it proves pruning ran, so the
    /// template-shape checks below apply.
    #[inline]
    pub fn has_imports(&self) -> bool {
        self.imports.is_some()
    }

    /// Does a script compiled against these imports go stale under `next`?
    ///
    /// True when `next` has no template (nothing constrains pruning any
    /// more), or when any recorded binding's template-usage decision flips
    /// against the new template content: a previously pruned import is now
    /// referenced, or a previously retained one no longer is.
    pub fn forces_reload(&self, next: &Descriptor) -> bool {
        let Some(imports) = &self.imports else {
            return false;
        };
        let Some(template) = &next.template else {
            return true;
        };

        imports.iter().any(|(name, binding)| {
            match identifier_pattern(name) {
                Some(re) => binding.used_in_template != re.is_match(&template.content),
                // Cannot decide; a spurious recompile beats a stale script.
                None => true,
            }
        })
    }
}

/// Word-boundary test for an identifier in template source.
///
/// A conservative stand-in for the compiler's identifier analysis: matches
/// in comments or strings over-report usage, which at worst recompiles a
/// script that did not need it. `$` counts as an identifier character.
fn identifier_pattern(name: &str) -> Option<Regex> {
    Regex::new(&format!(
        r"(?:^|[^0-9A-Za-z_$]){}(?:[^0-9A-Za-z_$]|$)",
        regex::escape(name)
    ))
    .ok()
}
