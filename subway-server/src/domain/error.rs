//! Domain error types.
//!
//! These errors represent validation failures and topology inconsistencies
//! in the domain layer. They are distinct from service and HTTP errors.

use super::{
    Distance, InvalidDistance, InvalidLineField, InvalidStationName, SelfLoopSection, StationId,
};

/// Broad category of a [`TopologyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The topology is in a state that does not permit the operation, or its
    /// sections no longer form a single path.
    IllegalState,

    /// The section offered to the topology cannot be added to it.
    InvalidSection,
}

/// Errors raised by [`LineTopology`](super::LineTopology).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// `initialize` called on a topology that already has sections
    #[error("line is already initialized with {0} section(s)")]
    AlreadyInitialized(usize),

    /// Zero or several stations qualify as the head of the line
    #[error("line has {0} candidate head stations, expected exactly one")]
    NoUniqueHead(usize),

    /// Zero or several stations qualify as the tail of the line
    #[error("line has {0} candidate tail stations, expected exactly one")]
    NoUniqueTail(usize),

    /// Walking from the head ran out of sections before consuming them all
    #[error("line is broken after station {0}")]
    BrokenChain(StationId),

    /// Two sections leave, or two enter, the same station
    #[error("line branches at station {0}")]
    Branching(StationId),

    /// Both endpoints of the new section are already on the line
    #[error("stations {0} and {1} are both already registered on the line")]
    BothStationsRegistered(StationId, StationId),

    /// Neither endpoint of the new section is on the line
    #[error("neither station {0} nor station {1} is registered on the line")]
    NoStationRegistered(StationId, StationId),

    /// No existing section can take the new one
    #[error("no section of the line can accept {0} -> {1}")]
    NoCompatibleSection(StationId, StationId),

    /// The new section would not fit inside the one it splits
    #[error("section of {new} must be shorter than the {existing} section it splits")]
    DistanceTooLong { new: Distance, existing: Distance },
}

impl TopologyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TopologyError::AlreadyInitialized(_)
            | TopologyError::NoUniqueHead(_)
            | TopologyError::NoUniqueTail(_)
            | TopologyError::BrokenChain(_)
            | TopologyError::Branching(_) => ErrorKind::IllegalState,
            TopologyError::BothStationsRegistered(..)
            | TopologyError::NoStationRegistered(..)
            | TopologyError::NoCompatibleSection(..)
            | TopologyError::DistanceTooLong { .. } => ErrorKind::InvalidSection,
        }
    }
}

/// Errors from constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    Distance(#[from] InvalidDistance),

    #[error(transparent)]
    StationName(#[from] InvalidStationName),

    #[error(transparent)]
    LineField(#[from] InvalidLineField),

    #[error(transparent)]
    SelfLoop(#[from] SelfLoopSection),
}
