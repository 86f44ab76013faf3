//! Script change detection.

use crate::cache::DescriptorCache;
use crate::descriptor::Descriptor;

use super::compare::{blocks_pairwise_equal, is_equal_block};

/// Whether any script-affecting change occurred between two parses.
///
/// Direct edits to either script variant count. Beyond that, the previous
/// compile's retained-import set depends on template usage analysis, so a
/// template edit can silently invalidate the compiled script: when the
/// previous descriptor's resolved metadata recorded imports, the decision
/// defers to [`ResolvedScript::forces_reload`](crate::ResolvedScript::forces_reload)
/// against the new parse.
pub fn script_changed(cache: &DescriptorCache, prev: &Descriptor, next: &Descriptor) -> bool {
    if !is_equal_block(prev.script.as_ref(), next.script.as_ref()) {
        return true;
    }
    if !is_equal_block(prev.script_setup.as_ref(), next.script_setup.as_ref()) {
        return true;
    }

    if let Some(resolved) = cache.resolved_script(prev, false)
        && resolved.has_imports()
    {
        return resolved.forces_reload(next);
    }

    false
}

/// Whether a change touched nothing but the template.
///
/// Callers use this to reuse a previously compiled script instead of
/// recompiling. False whenever the script changed, regardless of style and
/// custom block equality.
pub fn is_only_template_changed(
    cache: &DescriptorCache,
    prev: &Descriptor,
    next: &Descriptor,
) -> bool {
    !script_changed(cache, prev, next)
        && blocks_pairwise_equal(&prev.styles, &next.styles)
        && blocks_pairwise_equal(&prev.custom_blocks, &next.custom_blocks)
}
