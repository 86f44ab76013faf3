//! Structural block equality.

use crate::descriptor::Block;

/// Compare two optional blocks structurally.
///
/// Absence is a first-class state: both absent is equal, exactly one absent
/// is not - an empty block and a missing block are different things.
///
/// Blocks referencing the same external source path are equal without
/// content inspection; the external file's own change triggers its own
/// invalidation. Otherwise content must match and the attribute mappings
/// must agree key-for-key.
pub fn is_equal_block(a: Option<&Block>, b: Option<&Block>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };

    if let (Some(src_a), Some(src_b)) = (a.src(), b.src())
        && src_a == src_b
    {
        return true;
    }

    if a.content != b.content {
        return false;
    }
    if a.attrs.len() != b.attrs.len() {
        return false;
    }
    a.attrs
        .iter()
        .all(|(key, value)| b.attrs.get(key) == Some(value))
}

/// Pairwise equality over two block lists, length included.
pub fn blocks_pairwise_equal(prev: &[Block], next: &[Block]) -> bool {
    prev.len() == next.len()
        && prev
            .iter()
            .zip(next)
            .all(|(a, b)| is_equal_block(Some(a), Some(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AttrValue;

    fn style(content: &str) -> Block {
        Block::new("style", content)
    }

    #[test]
    fn both_absent_is_equal() {
        assert!(is_equal_block(None, None));
    }

    #[test]
    fn absence_is_not_an_empty_block() {
        let empty = style("");
        assert!(!is_equal_block(Some(&empty), None));
        assert!(!is_equal_block(None, Some(&empty)));
    }

    #[test]
    fn reflexive_and_symmetric() {
        let a = style(".a { color: red }").with_attr("scoped", AttrValue::Flag);
        let b = style(".b { color: blue }");

        assert!(is_equal_block(Some(&a), Some(&a)));
        assert_eq!(
            is_equal_block(Some(&a), Some(&b)),
            is_equal_block(Some(&b), Some(&a))
        );
    }

    #[test]
    fn content_difference_is_inequality() {
        let a = style(".a {}");
        let b = style(".b {}");
        assert!(!is_equal_block(Some(&a), Some(&b)));
    }

    #[test]
    fn shared_external_source_short_circuits_content() {
        let a = style("stale local copy").with_attr("src", "./theme.css");
        let b = style("fresh local copy").with_attr("src", "./theme.css");
        assert!(is_equal_block(Some(&a), Some(&b)));

        let c = style("stale local copy").with_attr("src", "./other.css");
        assert!(!is_equal_block(Some(&a), Some(&c)));
    }

    #[test]
    fn attr_count_mismatch_is_inequality() {
        let a = style(".a {}").with_attr("scoped", AttrValue::Flag);
        let b = style(".a {}");
        assert!(!is_equal_block(Some(&a), Some(&b)));
    }

    #[test]
    fn attr_value_mismatch_is_inequality() {
        let a = style(".a {}").with_attr("lang", "scss");
        let b = style(".a {}").with_attr("lang", "less");
        assert!(!is_equal_block(Some(&a), Some(&b)));
    }

    #[test]
    fn flag_and_value_attrs_differ() {
        let a = style(".a {}").with_attr("scoped", AttrValue::Flag);
        let b = style(".a {}").with_attr("scoped", "scoped");
        assert!(!is_equal_block(Some(&a), Some(&b)));
    }

    #[test]
    fn pairwise_includes_length() {
        let a = [style(".a {}")];
        let b = [style(".a {}"), style(".b {}")];
        assert!(!blocks_pairwise_equal(&a, &b));
        assert!(blocks_pairwise_equal(&a, &a));
        assert!(blocks_pairwise_equal(&[], &[]));
    }
}
