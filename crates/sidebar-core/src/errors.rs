//! Error types shared by the sidebar engine crates.

use thiserror::Error;

/// A configuration keyword that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    /// What was being parsed, e.g. "widget kind"
    pub kind: &'static str,
    /// The offending input
    pub value: String,
}
