//! Parsed component snapshots.
//!
//! A [`Descriptor`] is one parse of a multi-block source file at a point in
//! time. The cache owns the descriptor for its file path; a re-parse
//! supersedes it, never mutates it. Everything the diff core compares lives
//! here.

mod block;
mod script;

pub use block::{AttrValue, Block};
pub use script::{ImportBinding, ResolvedScript};

use smallvec::SmallVec;

use crate::utils::hash;

/// Immutable snapshot of one parse of a multi-block source file.
///
/// Produced by the host's [`ComponentCompiler`](crate::ComponentCompiler);
/// the diff core only reads it. Resolved-script metadata is not stored here -
/// it is attached lazily through the
/// [`DescriptorCache`](crate::DescriptorCache), keyed by `id`.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Stable identity for this exact `(file, content)` snapshot.
    pub id: String,
    /// The source file this descriptor was parsed from.
    pub file: String,
    /// Markup block, if the file has one.
    pub template: Option<Block>,
    /// Primary script block.
    pub script: Option<Block>,
    /// Alternate ("setup") script block.
    pub script_setup: Option<Block>,
    /// Style blocks in source order. One block is the common case.
    pub styles: SmallVec<[Block; 1]>,
    /// Custom blocks in source order.
    pub custom_blocks: Vec<Block>,
    /// Names of css variables the styles inject into the render output.
    pub css_vars: Vec<String>,
}

impl Descriptor {
    /// Create an empty descriptor for a `(file, content)` snapshot.
    ///
    /// Compilers fill in the blocks they parsed; the id is minted here so
    /// every snapshot of the same content maps to the same identity.
    pub fn new(file: impl Into<String>, content: &str) -> Self {
        let file = file.into();
        // NUL keeps ("a", "bc") and ("ab", "c") snapshots distinct.
        Self {
            id: hash::fingerprint(&format!("{file}\u{0}{content}")),
            file,
            template: None,
            script: None,
            script_setup: None,
            styles: SmallVec::new(),
            custom_blocks: Vec::new(),
            css_vars: Vec::new(),
        }
    }
}
