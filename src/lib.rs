//! Hotdiff - change-impact analysis for multi-block component sources.
//!
//! A multi-block source file packages distinct concerns (markup, one or more
//! script variants, style blocks, arbitrary custom blocks) inside one
//! document; a dev server splits it into individually addressable virtual
//! modules. On every file change this crate diffs the previous parse against
//! the new one, block by block, and tells the host exactly which of those
//! modules are stale.
//!
//! # Architecture
//!
//! ```text
//! file change -> compiler (parse) -> reload (diff) -> affected modules
//!                      |                 |
//!              DescriptorCache      ModuleIndex
//!              (previous parse)   (host module graph)
//! ```
//!
//! The host owns file watching, safe reads, module identity and reload
//! dispatch; this crate owns the comparison. Ambiguity never produces an
//! empty invalidation for a real change - it escalates to the entry module.

pub mod cache;
pub mod compiler;
pub mod descriptor;
pub mod logger;
pub mod modules;
pub mod reload;
mod utils;

pub use cache::DescriptorCache;
pub use compiler::{CompilerError, ComponentCompiler};
pub use descriptor::{AttrValue, Block, Descriptor, ImportBinding, ResolvedScript};
pub use modules::{ModuleIndex, ModuleRef};
pub use reload::{
    HotUpdate, UpdateKind, handle_hot_update, is_equal_block, is_only_template_changed,
};
