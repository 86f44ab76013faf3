//! Hot-update diff core.
//!
//! Compares two parses of the same component file and turns structural
//! differences into the set of virtual modules the host must invalidate.
//!
//! # Architecture
//!
//! ```text
//! previous descriptor ──┐
//!                       ├─> compare / script / style / custom ─> HotUpdate
//! new descriptor ───────┘              (via ModuleIndex)
//! ```
//!
//! # Modules
//!
//! - `compare` - structural block equality, the primitive every diff builds on
//! - `script` - script change detection, including template-driven import pruning
//! - `style` - positional style diff with scope-toggle and css-var policies
//! - `custom` - positional custom block diff
//! - `impact` - the entry point aggregating findings into a [`HotUpdate`]

pub mod compare;
pub mod custom;
pub mod impact;
pub mod script;
pub mod style;


pub use compare::is_equal_block;
pub use custom::diff_custom_blocks;
pub use impact::{AffectedModules, HotUpdate, UpdateKind, handle_hot_update};
pub use script::{is_only_template_changed, script_changed};
pub use style::diff_styles;
