//! Block model: one named section of a component source file.

use rustc_hash::FxHashMap;

/// Attribute value on a block tag.
///
/// Bare attributes (`<style scoped>`) carry no value; everything else keeps
/// the literal string from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Bare attribute with no value.
    Flag,
    /// Attribute with an explicit value.
    Value(String),
}

impl AttrValue {
    /// Truthiness: bare flags and non-empty values count, empty values don't.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag => true,
            Self::Value(v) => !v.is_empty(),
        }
    }

    /// The concrete string value, when present and non-empty.
    #[inline]
    pub fn as_nonempty_str(&self) -> Option<&str> {
        match self {
            Self::Value(v) if !v.is_empty() => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

/// A single section of a component source file.
///
/// `name` is the tag name: `template`, `script`, `style`, or the name of a
/// custom block. Primary and alternate script blocks share the `script`
/// name; the descriptor field a block lives in determines its role.
///
/// `attrs` is the single source of truth - language tag, external source
/// reference and scope flag are all derived from it, so the comparator sees
/// every attribute edit.
#[derive(Debug, Clone)]
pub struct Block {
    /// Tag name of the block.
    pub name: String,
    /// Raw content between the block's tags.
    pub content: String,
    /// Attribute name -> value mapping. Insertion order is irrelevant.
    pub attrs: FxHashMap<String, AttrValue>,
}

impl Block {
    /// Create a block with no attributes.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            attrs: FxHashMap::default(),
        }
    }

    /// Attach an attribute (builder style, for compilers and fixtures).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Language tag (`lang="ts"`), when explicitly set.
    #[inline]
    pub fn lang(&self) -> Option<&str> {
        self.attr_str("lang")
    }

    /// External source reference (`src="./other.css"`).
    ///
    /// Only a concrete non-empty path counts; a bare `src` flag gives the
    /// comparator nothing to match against and is ignored.
    #[inline]
    pub fn src(&self) -> Option<&str> {
        self.attr_str("src")
    }

    /// Whether the block's rules are scoped to the component's own markup.
    #[inline]
    pub fn is_scoped(&self) -> bool {
        self.attrs.get("scoped").is_some_and(AttrValue::is_truthy)
    }

    fn attr_str(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_nonempty_str)
    }
}
