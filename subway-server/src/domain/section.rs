//! Directed section between two adjacent stations.

use std::fmt;

use super::{Distance, Station, StationId};

/// Error returned when a section would start and end at the same station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("section cannot start and end at station {station}")]
pub struct SelfLoopSection {
    station: StationId,
}

/// A directed edge from an up-station to the adjacent down-station.
///
/// Up and down are always distinct stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, SelfLoopSection> {
        if up == down {
            return Err(SelfLoopSection { station: up.id() });
        }
        Ok(Self { up, down, distance })
    }

    pub fn up(&self) -> &Station {
        &self.up
    }

    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Whether `station` is either endpoint.
    pub fn contains(&self, station: &Station) -> bool {
        self.up == *station || self.down == *station
    }

    pub fn is_up_station(&self, station: &Station) -> bool {
        self.up == *station
    }

    pub fn is_down_station(&self, station: &Station) -> bool {
        self.down == *station
    }

    /// Whether `candidate` lies inside this section, sharing exactly one
    /// endpoint on the same side.
    pub fn can_reflect(&self, candidate: &Section) -> bool {
        (self.up == candidate.up && self.down != candidate.down)
            || (self.down == candidate.down && self.up != candidate.up)
    }

    /// The remainder of this section once `candidate` is carved out of it.
    ///
    /// Returns `None` if `candidate` does not lie inside this section or is
    /// not strictly shorter than it.
    pub fn shrunk_by(&self, candidate: &Section) -> Option<Section> {
        if !self.can_reflect(candidate) {
            return None;
        }
        let distance = self.distance.checked_sub(candidate.distance)?;

        let (up, down) = if self.up == candidate.up {
            (candidate.down.clone(), self.down.clone())
        } else {
            (self.up.clone(), candidate.up.clone())
        };
        Some(Section { up, down, distance })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.up.id(),
            self.down.id(),
            self.distance
        )
    }
}
