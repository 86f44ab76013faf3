//! Source compiler collaboration surface.
//!
//! Parsing grammar belongs to the host's compiler; the analyzer only invokes
//! it. The trait keeps the diff core testable and lets hosts plug in
//! whatever compiler their component format ships with.

use thiserror::Error;

use crate::descriptor::Descriptor;

/// Compiler-side failures surfaced to the analyzer.
#[derive(Debug, Error)]
pub enum CompilerError {
    /// The component compiler could not be located in the host project.
    ///
    /// A configuration-level failure: reported once, fatal to the invocation
    /// path, unrelated to the per-file hot path.
    #[error("failed to resolve component compiler: {0}")]
    Unresolved(String),

    /// The compiler rejected the new content.
    #[error("failed to parse `{file}`: {message}")]
    Parse { file: String, message: String },
}

/// Parses raw component source into a [`Descriptor`].
pub trait ComponentCompiler {
    fn parse(&self, file: &str, content: &str) -> Result<Descriptor, CompilerError>;
}

/// Plain functions work as compilers; hosts and tests inject closures.
impl<F> ComponentCompiler for F
where
    F: Fn(&str, &str) -> Result<Descriptor, CompilerError>,
{
    fn parse(&self, file: &str, content: &str) -> Result<Descriptor, CompilerError> {
        self(file, content)
    }
}
