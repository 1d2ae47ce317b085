//! Network service error types.

use crate::domain::{DomainError, LineId, StationId, TopologyError};

/// Errors that can occur when managing stations and lines.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NetworkError {
    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Another line already uses this name
    #[error("a line named {0:?} already exists")]
    DuplicateLineName(String),

    /// The station is part of at least one line
    #[error("station {station} is used by line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// A request value failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The line topology rejected the operation
    #[error(transparent)]
    Topology(#[from] TopologyError),
}
