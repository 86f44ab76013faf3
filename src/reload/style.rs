//! Positional style diff.

use crate::descriptor::{Block, Descriptor};
use crate::modules::ModuleIndex;

use super::compare::is_equal_block;
use super::impact::AffectedModules;

/// Diff the style block lists of two parses.
///
/// Adds every module the style changes invalidate to `affected` and returns
/// whether any style content actually updated (the "style" classification).
///
/// Policies, in order:
/// - css-variable injection changed -> the entry module re-renders (styles
///   inject variables its render output consumes)
/// - the "any block scoped" flag toggled -> template and entry modules, a
///   scope toggle rewrites the template's generated class bindings
/// - per-index content change -> the addressable `(style, index, lang)`
///   module, plus the entry when that module is inline; unaddressable
///   changes (new block, lookup miss) escalate to the entry
/// - trailing block removed -> the entry module, removals have no index to
///   address
pub fn diff_styles(
    prev: &Descriptor,
    next: &Descriptor,
    index: &ModuleIndex,
    affected: &mut AffectedModules,
) -> bool {
    let mut updated = false;

    if prev.css_vars.join("") != next.css_vars.join("") {
        affected.add(index.main());
    }

    let prev_scoped = prev.styles.iter().any(Block::is_scoped);
    let next_scoped = next.styles.iter().any(Block::is_scoped);
    if prev_scoped != next_scoped {
        affected.add(index.template());
        affected.add(index.main());
    }

    for (i, style) in next.styles.iter().enumerate() {
        if is_equal_block(prev.styles.get(i), Some(style)) {
            continue;
        }
        updated = true;

        let lang = style.lang().unwrap_or("css");
        match index.style(i, lang) {
            Some(found) => {
                affected.add(Some(found.module));
                if found.inline {
                    affected.add(index.main());
                }
            }
            // New or unaddressable block: reload the entry.
            None => affected.add(index.main()),
        }
    }

    if prev.styles.len() > next.styles.len() {
        // Removal is not addressable per index.
        affected.add(index.main());
    }

    updated
}
