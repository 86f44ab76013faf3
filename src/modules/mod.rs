//! Host module graph surface.
//!
//! Virtual modules belong to the host dev server: it mints their ids, tracks
//! importer edges and performs the actual invalidation. The analyzer only
//! reads this surface - parsing the query markers a module id embeds and
//! indexing the live list for the lookups the diff engines need.
//!
//! - `query` - marker parsing (`type=`, `index=`, `lang=`, `inline`, `direct`)
//! - `index` - per-invocation lookup index over the live module list

mod index;
mod query;

pub use index::ModuleIndex;
pub use query::{BlockQuery, is_style_request};

/// A live virtual module tracked by the host's module graph.
///
/// `id` is the full request string including query markers; exactly one
/// virtual module corresponds to each concrete block instance. `importers`
/// are the host-maintained back-edges (ids of modules importing this one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRef {
    /// Full module id, markers included.
    pub id: String,
    /// Ids of modules that import this one.
    pub importers: Vec<String>,
}

impl ModuleRef {
    /// A module with no recorded importers.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            importers: Vec::new(),
        }
    }

    /// Attach importer back-edges (builder style).
    pub fn with_importers(mut self, importers: Vec<String>) -> Self {
        self.importers = importers;
        self
    }
}
