//! Positional custom block diff.
//!
//! Simpler than the style diff: no scope or injection special cases.
//! Custom block contents may be consumed from script code, so structural
//! changes (add/remove) always reload the entry.

use crate::descriptor::Descriptor;
use crate::modules::ModuleIndex;

use super::compare::is_equal_block;
use super::impact::AffectedModules;

/// Diff the custom block lists of two parses, adding invalidations to
/// `affected`.
pub fn diff_custom_blocks(
    prev: &Descriptor,
    next: &Descriptor,
    index: &ModuleIndex,
    affected: &mut AffectedModules,
) {
    if prev.custom_blocks.len() != next.custom_blocks.len() {
        // Added or removed blocks change script-visible structure.
        affected.add(index.main());
        return;
    }

    for (i, (prev_block, next_block)) in prev
        .custom_blocks
        .iter()
        .zip(&next.custom_blocks)
        .enumerate()
    {
        if is_equal_block(Some(prev_block), Some(next_block)) {
            continue;
        }
        // The live module was minted from the previous parse, so the lookup
        // key uses the previous block's type name.
        let module = index.custom(&prev_block.name, i);
        affected.add(module.or_else(|| index.main()));
    }
}
