//! Impact aggregation: the hot-update entry point.
//!
//! Orchestrates the block-level diffs, maps findings onto the host's live
//! module list and produces the final invalidation set. The standing policy
//! throughout: an ambiguity or lookup miss never yields zero invalidation
//! for a real change - it escalates to the entry module.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cache::DescriptorCache;
use crate::compiler::{CompilerError, ComponentCompiler};
use crate::descriptor::Descriptor;
use crate::modules::{ModuleIndex, ModuleRef, is_style_request};

use super::compare::is_equal_block;
use super::{custom, script, style};

// ============================================================================
// Result Types
// ============================================================================

/// What a change touched, for the host's diagnostic log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Template,
    Style,
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Template => "template",
            Self::Style => "style",
        })
    }
}

/// Result of one hot-update analysis.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HotUpdate {
    /// Ordered, deduplicated change classification.
    pub kinds: Vec<UpdateKind>,
    /// Ordered, deduplicated ids of the modules the host must invalidate.
    pub affected: Vec<String>,
}

impl HotUpdate {
    /// True when the change needs no invalidation at all.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty() && self.affected.is_empty()
    }

    /// Render the classification for the `[update(...)]` log line.
    pub fn classification(&self) -> String {
        self.kinds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Insertion-ordered module set with identity dedup.
///
/// Mirrors the host graph's set semantics: first insertion fixes position,
/// repeats are ignored, absent lookups (`add(None)`) are no-ops so fallback
/// chains read linearly at call sites.
#[derive(Debug, Default)]
pub struct AffectedModules {
    ids: Vec<String>,
    seen: FxHashSet<String>,
}

impl AffectedModules {
    /// Add a module when present.
    pub fn add(&mut self, module: Option<&ModuleRef>) {
        if let Some(module) = module {
            self.add_id(&module.id);
        }
    }

    /// Add a module by id.
    pub fn add_id(&mut self, id: &str) {
        if self.seen.insert(id.to_string()) {
            self.ids.push(id.to_string());
        }
    }

    /// Whether a module is already marked.
    pub fn contains(&self, module: &ModuleRef) -> bool {
        self.seen.contains(&module.id)
    }

    /// The collected ids, in insertion order.
    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Analyze one file-change event.
///
/// Parses `content` through the injected compiler, diffs the result against
/// the cached previous parse and returns what the host must invalidate.
///
/// Returns `Ok(None)` when the file was never requested (e.g. an async
/// component not yet loaded) - expected, not an error. On success the new
/// descriptor replaces the cached baseline (read-before, write-after; the
/// caller serializes events per file).
pub fn handle_hot_update(
    compiler: &dyn ComponentCompiler,
    cache: &DescriptorCache,
    file: &str,
    content: &str,
    modules: &[ModuleRef],
) -> Result<Option<HotUpdate>, CompilerError> {
    let Some(prev) = cache.previous(file) else {
        return Ok(None);
    };

    let next = Arc::new(compiler.parse(file, content)?);

    let index = ModuleIndex::build(modules);
    let mut affected = AffectedModules::default();
    let mut needs_rerender = false;

    let script_changed = script::script_changed(cache, &prev, &next);
    if script_changed {
        affected.add(script_target(&next, &index).or_else(|| index.main()));
    }

    if !is_equal_block(prev.template.as_ref(), next.template.as_ref()) {
        // Reloading a template alone loses the binding metadata its script
        // compile produced; carry the previous resolved script over so the
        // new template renders against valid bindings.
        if !script_changed
            && let Some(meta) = cache.resolved_script(&prev, false)
        {
            cache.set_resolved_script(&next, meta, false);
        }
        affected.add(index.template());
        needs_rerender = true;
    }

    let style_updated = style::diff_styles(&prev, &next, &index, &mut affected);
    custom::diff_custom_blocks(&prev, &next, &index, &mut affected);

    let mut kinds = Vec::new();
    if needs_rerender {
        kinds.push(UpdateKind::Template);
        match index.template() {
            // The template is inlined into the entry output.
            None => affected.add(index.main()),
            Some(_) => {
                if let Some(main) = index.main()
                    && !affected.contains(main)
                {
                    // Style modules importing the entry embed the class
                    // bindings this template change rewrote.
                    for importer in &main.importers {
                        if is_style_request(importer) {
                            affected.add_id(importer);
                        }
                    }
                }
            }
        }
    }
    if style_updated {
        kinds.push(UpdateKind::Style);
    }

    let update = HotUpdate {
        kinds,
        affected: affected.into_ids(),
    };
    if !update.kinds.is_empty() {
        crate::debug!("hmr"; "[update({})] {}", update.classification(), file);
    }

    // The new parse becomes the baseline for the next event.
    cache.set_previous(next);

    Ok(Some(update))
}

/// The dedicated module to invalidate for a script change, when one exists.
///
/// A script block with an explicit language tag and local content maps to
/// its own `(type=script, lang)` module; external-source scripts and
/// untagged scripts stay with the entry fallback.
fn script_target<'a>(next: &Descriptor, index: &ModuleIndex<'a>) -> Option<&'a ModuleRef> {
    let lang = [next.script_setup.as_ref(), next.script.as_ref()]
        .into_iter()
        .flatten()
        .find_map(|block| match block.src() {
            None => block.lang(),
            Some(_) => None,
        })?;
    index.script(lang)
}
