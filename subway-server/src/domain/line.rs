//! Subway line aggregate.

use std::fmt;

use chrono::{DateTime, Utc};

use super::error::TopologyError;
use super::{LineTopology, Section, Station};

/// Error returned when a line name or color fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line {field}: {reason}")]
pub struct InvalidLineField {
    field: &'static str,
    reason: &'static str,
}

/// Numeric line identifier, allocated by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, trimmed line name (e.g. "Line 2").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineName(String);

impl LineName {
    pub fn parse(s: &str) -> Result<Self, InvalidLineField> {
        non_empty(s, "name").map(LineName)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty, trimmed display color (e.g. "bg-green-600").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineColor(String);

impl LineColor {
    pub fn parse(s: &str) -> Result<Self, InvalidLineField> {
        non_empty(s, "color").map(LineColor)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_empty(s: &str, field: &'static str) -> Result<String, InvalidLineField> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InvalidLineField {
            field,
            reason: "cannot be empty",
        });
    }
    Ok(trimmed.to_string())
}

/// A subway line: descriptive fields plus the sections it runs over.
///
/// A line always has at least one section; it is created with its first
/// one and the topology is never empty afterwards.
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: LineName,
    color: LineColor,
    topology: LineTopology,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Line {
    /// Create a line running over `first`.
    pub fn new(
        id: LineId,
        name: LineName,
        color: LineColor,
        first: Section,
    ) -> Result<Self, TopologyError> {
        let mut topology = LineTopology::new();
        topology.initialize(first)?;

        let now = Utc::now();
        Ok(Self {
            id,
            name,
            color,
            topology,
            created_at: now,
            modified_at: now,
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &LineName {
        &self.name
    }

    pub fn color(&self) -> &LineColor {
        &self.color
    }

    pub fn topology(&self) -> &LineTopology {
        &self.topology
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Stations from head to tail.
    pub fn stations(&self) -> Result<Vec<Station>, TopologyError> {
        self.topology.ordered_stations()
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.topology.contains(station)
    }

    /// Replace the name and color.
    pub fn update(&mut self, name: LineName, color: LineColor) {
        self.name = name;
        self.color = color;
        self.touch();
    }

    /// Extend the line with `section`. The line is unchanged on error.
    pub fn add_section(&mut self, section: Section) -> Result<(), TopologyError> {
        self.topology.add_section(section)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
