//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Error returned when a station name fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// Numeric station identifier, allocated by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty, trimmed station display name.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationName;
///
/// let name = StationName::parse("  Gangnam ").unwrap();
/// assert_eq!(name.as_str(), "Gangnam");
///
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(Arc<str>);

impl StationName {
    /// Parse a station name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "station name cannot be empty",
            });
        }
        Ok(StationName(trimmed.into()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station on the network.
///
/// Stations are immutable once created. Equality and hashing use the id
/// only, so two values with the same id are the same station regardless of
/// the name they carry.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: StationName,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: StationName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &StationName {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
