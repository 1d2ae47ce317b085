//! Station ordering and section insertion for a single line.
//!
//! A line is stored as an unordered arena of directed [`Section`]s. The
//! sections must always form one simple path, so the station order can be
//! recovered from them at any time: start at the only station that is never
//! a down-station and follow up-station → section links until every section
//! has been used.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::error::TopologyError;
use super::{Section, Station, StationId};

/// The sections of one line.
///
/// Lifecycle: created empty, seeded once with [`initialize`](Self::initialize),
/// then grown with [`add_section`](Self::add_section). There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTopology {
    sections: Vec<Section>,
}

impl LineTopology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// All sections, in insertion order (not line order).
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether `station` is an endpoint of any section.
    pub fn contains(&self, station: &Station) -> bool {
        self.sections.iter().any(|s| s.contains(station))
    }

    /// Seed an empty topology with its first section.
    pub fn initialize(&mut self, section: Section) -> Result<(), TopologyError> {
        if !self.sections.is_empty() {
            return Err(TopologyError::AlreadyInitialized(self.sections.len()));
        }
        debug!(%section, "initializing line");
        self.sections.push(section);
        Ok(())
    }

    /// Add a section that shares exactly one station with the line.
    ///
    /// If the new section falls inside an existing one (same up-station or
    /// same down-station), the existing section is shrunk to cover the rest
    /// of the gap and gives up the new section's distance. Otherwise the new
    /// section extends the line past its head or tail.
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_section(&mut self, section: Section) -> Result<(), TopologyError> {
        let up = section.up().id();
        let down = section.down().id();

        match (self.contains(section.up()), self.contains(section.down())) {
            (true, true) => return Err(TopologyError::BothStationsRegistered(up, down)),
            (false, false) => return Err(TopologyError::NoStationRegistered(up, down)),
            _ => {}
        }

        let head = self.head()?.id();
        let tail = self.tail()?.id();

        let target = self
            .sections
            .iter()
            .position(|existing| can_add(existing, &section, head, tail))
            .ok_or(TopologyError::NoCompatibleSection(up, down))?;

        let existing = &self.sections[target];
        if existing.can_reflect(&section) {
            let shrunk =
                existing
                    .shrunk_by(&section)
                    .ok_or(TopologyError::DistanceTooLong {
                        new: section.distance(),
                        existing: existing.distance(),
                    })?;
            debug!(from = %existing, to = %shrunk, "splitting section");
            self.sections[target] = shrunk;
        } else {
            debug!(%section, "extending line");
        }

        self.sections.push(section);
        Ok(())
    }

    /// The station every other station is downstream of.
    pub fn head(&self) -> Result<&Station, TopologyError> {
        let downs: HashSet<StationId> = self.sections.iter().map(|s| s.down().id()).collect();
        unique_end(self.sections.iter().map(Section::up), &downs)
            .map_err(TopologyError::NoUniqueHead)
    }

    /// The station every other station is upstream of.
    pub fn tail(&self) -> Result<&Station, TopologyError> {
        let ups: HashSet<StationId> = self.sections.iter().map(|s| s.up().id()).collect();
        unique_end(self.sections.iter().map(Section::down), &ups)
            .map_err(TopologyError::NoUniqueTail)
    }

    /// Stations from head to tail.
    ///
    /// A well-formed topology with N sections yields N + 1 distinct stations.
    /// Fails if the sections do not form a single simple path.
    pub fn ordered_stations(&self) -> Result<Vec<Station>, TopologyError> {
        let head = self.head()?;

        let mut next_by_up: HashMap<StationId, usize> = HashMap::with_capacity(self.sections.len());
        let mut seen_downs: HashSet<StationId> = HashSet::with_capacity(self.sections.len());
        for (idx, section) in self.sections.iter().enumerate() {
            if next_by_up.insert(section.up().id(), idx).is_some() {
                return Err(TopologyError::Branching(section.up().id()));
            }
            if !seen_downs.insert(section.down().id()) {
                return Err(TopologyError::Branching(section.down().id()));
            }
        }

        let mut ordered = Vec::with_capacity(self.sections.len() + 1);
        ordered.push(head.clone());

        // Each lookup consumes its entry, so the walk ends after at most N steps.
        let mut current = head.id();
        while !next_by_up.is_empty() {
            let idx = next_by_up
                .remove(&current)
                .ok_or(TopologyError::BrokenChain(current))?;
            let down = self.sections[idx].down();
            ordered.push(down.clone());
            current = down.id();
        }

        Ok(ordered)
    }
}

/// Whether `candidate` can be attached to the line against `existing`.
fn can_add(existing: &Section, candidate: &Section, head: StationId, tail: StationId) -> bool {
    existing.is_up_station(candidate.up())
        || existing.is_down_station(candidate.down())
        || (existing.up().id() == head && existing.is_up_station(candidate.down()))
        || (existing.down().id() == tail && existing.is_down_station(candidate.up()))
}

/// The single station among `ends` that never appears in `excluded`.
///
/// On failure, returns how many distinct stations qualified.
fn unique_end<'a>(
    ends: impl Iterator<Item = &'a Station>,
    excluded: &HashSet<StationId>,
) -> Result<&'a Station, usize> {
    let mut found: Option<&Station> = None;
    let mut distinct = HashSet::new();
    for station in ends.filter(|s| !excluded.contains(&s.id())) {
        if distinct.insert(station.id()) && found.is_none() {
            found = Some(station);
        }
    }

    match found {
        Some(station) if distinct.len() == 1 => Ok(station),
        _ => Err(distinct.len()),
    }
}

#[cfg(test)]
#[path = "topology_tests.rs"]
mod tests;
