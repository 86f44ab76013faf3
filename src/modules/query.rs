//! Query-marker parsing for virtual module references.
//!
//! A module id encodes which block it was generated from via query-style
//! markers after `?`: `type=<template|script|style|custom-name>`,
//! `index=<N>`, `lang=<ext>`, plus the bare flags `inline` and `direct`.
//! The encoding is owned by the host; any change to it is a breaking
//! compatibility change for this crate.

use std::sync::LazyLock;

use regex::Regex;

/// Block markers parsed out of one module id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockQuery {
    /// `type=` marker: which block kind the module was generated from.
    /// Absent on entry-level requests.
    pub block_type: Option<String>,
    /// `index=` marker: position of the block within its kind.
    pub index: Option<usize>,
    /// `lang=` marker: language/extension of the generated artifact.
    pub lang: Option<String>,
    /// `inline` flag: the artifact is embedded in the entry module's output.
    pub inline: bool,
    /// `direct` flag: served verbatim to the browser, invalidated on its own.
    pub direct: bool,
}

impl BlockQuery {
    /// Parse the markers from a module id. Ids without a query part (the
    /// plain file request) parse to the default, untyped query.
    pub fn parse(id: &str) -> Self {
        let Some((_, query)) = id.split_once('?') else {
            return Self::default();
        };

        let mut parsed = Self::default();
        for marker in query.split('&') {
            match marker.split_once('=') {
                Some(("type", value)) => parsed.block_type = Some(value.to_string()),
                Some(("index", value)) => parsed.index = value.parse().ok(),
                Some(("lang", value)) => parsed.lang = Some(value.to_string()),
                Some(_) => {}
                None => match marker {
                    "inline" => parsed.inline = true,
                    "direct" => parsed.direct = true,
                    _ => {}
                },
            }
        }
        parsed
    }

    /// Whether this module can stand in for the file's entry module:
    /// untyped requests and the script entry qualify, block-level
    /// artifacts don't.
    #[inline]
    pub fn is_entry_candidate(&self) -> bool {
        match self.block_type.as_deref() {
            None | Some("script") => true,
            Some(_) => false,
        }
    }
}

/// Style-sheet extensions the host serves as style requests.
static STYLE_REQUEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(css|less|sass|scss|styl|stylus|pcss|postcss)(?:$|\?)").unwrap()
});

/// Whether a module id is a style request.
///
/// Either a block-level style module (`type=style`) or a plain stylesheet
/// import by extension. Used to find the style importers of the entry
/// module that must re-render after a template change.
pub fn is_style_request(id: &str) -> bool {
    BlockQuery::parse(id).block_type.as_deref() == Some("style") || STYLE_REQUEST_RE.is_match(id)
}
