//! Error types for the fold engine.
//!
//! None of these are meant to reach the host as a thrown exception. Callers
//! absorb them, log through `tracing`, and fall back to a defaulted state.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The body surface is read-only while the block is collapsed.
    #[error("block body is collapsed; expand it before editing")]
    NotEditable,

    #[error("invalid block config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FoldError::NotEditable.to_string(),
            "block body is collapsed; expand it before editing"
        );
        assert_eq!(
            FoldError::InvalidConfig("cutLimit: expected number".into()).to_string(),
            "invalid block config: cutLimit: expected number"
        );
    }
}
