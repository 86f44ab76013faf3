//! Descriptor cache: the analyzer's view of previously parsed state.
//!
//! The host dev server owns parse results; this store models that ownership
//! explicitly instead of hiding it in module-level globals. Two tables:
//!
//! - one previous-descriptor slot per file id, read before a diff and
//!   written after it (single writer per key - the host serializes change
//!   events per file)
//! - a resolved-script side table keyed by descriptor identity, populated
//!   lazily by the host's script compile step and carried forward across
//!   descriptor generations on template-only edits

use std::sync::Arc;

use dashmap::DashMap;

use crate::descriptor::{Descriptor, ResolvedScript};

/// Key for the resolved-script table: descriptor identity plus the
/// server-render variant flag (client and server compiles differ).
type ResolvedKey = (String, bool);

/// Injected key-value store for descriptors and resolved-script metadata.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    previous: DashMap<String, Arc<Descriptor>>,
    resolved: DashMap<ResolvedKey, Arc<ResolvedScript>>,
}

impl DescriptorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptor produced by the last parse of `file`, if tracked.
    pub fn previous(&self, file: &str) -> Option<Arc<Descriptor>> {
        self.previous.get(file).map(|entry| Arc::clone(&entry))
    }

    /// Install `descriptor` as the comparison baseline for its file.
    ///
    /// The superseded descriptor's resolved-script entries are released with
    /// it - nothing references a stale generation once the slot advances.
    /// An identical-content reparse keeps the same identity and therefore
    /// keeps its metadata.
    pub fn set_previous(&self, descriptor: Arc<Descriptor>) {
        let id = descriptor.id.clone();
        let replaced = self
            .previous
            .insert(descriptor.file.clone(), descriptor);
        if let Some(old) = replaced
            && old.id != id
        {
            self.release_resolved(&old.id);
        }
    }

    /// Drop all state for a file (host cleanup when the file is deleted).
    pub fn remove(&self, file: &str) {
        if let Some((_, old)) = self.previous.remove(file) {
            self.release_resolved(&old.id);
        }
    }

    /// Resolved-script metadata attached to `descriptor`, if any.
    pub fn resolved_script(
        &self,
        descriptor: &Descriptor,
        ssr: bool,
    ) -> Option<Arc<ResolvedScript>> {
        self.resolved
            .get(&(descriptor.id.clone(), ssr))
            .map(|entry| Arc::clone(&entry))
    }

    /// Attach resolved-script metadata to `descriptor`.
    pub fn set_resolved_script(
        &self,
        descriptor: &Descriptor,
        meta: Arc<ResolvedScript>,
        ssr: bool,
    ) {
        self.resolved.insert((descriptor.id.clone(), ssr), meta);
    }

    fn release_resolved(&self, descriptor_id: &str) {
        self.resolved
            .remove(&(descriptor_id.to_string(), false));
        self.resolved.remove(&(descriptor_id.to_string(), true));
    }
}
