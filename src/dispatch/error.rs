use thiserror::Error;

use crate::dispatch::patient::Severity;

/// Errors reported by dispatch operations.
///
/// Every variant is recoverable at the command boundary: a failed
/// operation leaves the directory unchanged and further operations are
/// accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The named city is not part of the registered topology.
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// No open facility is reachable from the origin city.
    #[error("no open facility reachable from {0}")]
    NoOpenFacility(String),

    /// Treatment was requested at a closed facility.
    #[error("facility at {0} is closed")]
    FacilityClosed(String),

    /// Severity outside the accepted range.
    #[error(
        "severity must be between {min} and {max}, got {got}",
        min = Severity::MIN,
        max = Severity::MAX
    )]
    InvalidSeverity { got: u8 },
}
