//! Domain types for the subway line server.
//!
//! This module contains the core domain model: stations, the sections that
//! join them, and the per-line topology that keeps those sections in a
//! single unbranched path. All value types enforce their invariants at
//! construction time.

mod distance;
mod error;
mod line;
mod section;
mod station;
mod topology;

pub use distance::{Distance, InvalidDistance};
pub use error::{DomainError, ErrorKind, TopologyError};
pub use line::{InvalidLineField, Line, LineColor, LineId, LineName};
pub use section::{Section, SelfLoopSection};
pub use station::{InvalidStationName, Station, StationId, StationName};
pub use topology::LineTopology;
