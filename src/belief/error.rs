//! Error types for the belief layer.

use thiserror::Error;

/// Errors raised by knowledge-base operations.
///
/// Tautologies, contradictions and unentailed goals are ordinary outcomes of
/// reasoning and are never reported here. The only failure is a caller passing
/// an entrenchment degree outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BeliefError {
    #[error("invalid argument: order {order} is outside [0, 1]")]
    InvalidArgument { order: f64 },
}

/// Result type for knowledge-base operations.
pub type Result<T> = std::result::Result<T, BeliefError>;
