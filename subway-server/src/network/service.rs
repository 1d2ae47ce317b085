//! In-memory station and line registry.
//!
//! `SubwayNetwork` is the orchestration layer over the domain: it allocates
//! ids, resolves station ids to stations, keeps line names unique, and hands
//! validated sections to each line's topology. It has no internal locking;
//! callers that share it must serialize mutations themselves.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    Distance, DomainError, Line, LineColor, LineId, LineName, Section, Station, StationId,
    StationName,
};

use super::error::NetworkError;

/// Everything needed to create a line.
#[derive(Debug, Clone)]
pub struct LineDraft {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// A section to add to an existing line.
#[derive(Debug, Clone, Copy)]
pub struct SectionDraft {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Read-only snapshot of a line with its stations in order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<Station>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl LineView {
    fn from_line(line: &Line) -> Result<Self, NetworkError> {
        Ok(Self {
            id: line.id(),
            name: line.name().as_str().to_string(),
            color: line.color().as_str().to_string(),
            stations: line.stations()?,
            created_at: line.created_at(),
            modified_at: line.modified_at(),
        })
    }
}

/// All stations and lines known to the server.
#[derive(Debug, Default)]
pub struct SubwayNetwork {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    next_station_id: u64,
    next_line_id: u64,
}

impl SubwayNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Stations
    // ------------------------------------------------------------------

    /// Register a new station.
    pub fn create_station(&mut self, name: &str) -> Result<Station, NetworkError> {
        let name = StationName::parse(name).map_err(DomainError::from)?;
        self.next_station_id += 1;
        let station = Station::new(StationId(self.next_station_id), name);

        info!(station = %station, "created station");
        self.stations.insert(station.id(), station.clone());
        Ok(station)
    }

    /// All stations, ordered by id.
    pub fn stations(&self) -> Vec<Station> {
        self.stations.values().cloned().collect()
    }

    pub fn station(&self, id: StationId) -> Result<&Station, NetworkError> {
        self.stations
            .get(&id)
            .ok_or(NetworkError::StationNotFound(id))
    }

    /// Remove a station that no line runs through.
    pub fn delete_station(&mut self, id: StationId) -> Result<(), NetworkError> {
        let station = self.station(id)?;
        if let Some(line) = self.lines.values().find(|l| l.contains(station)) {
            return Err(NetworkError::StationInUse {
                station: id,
                line: line.id(),
            });
        }

        self.stations.remove(&id);
        info!(station = %id, "deleted station");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Create a line running over a single section.
    pub fn create_line(&mut self, draft: LineDraft) -> Result<LineView, NetworkError> {
        let name = LineName::parse(&draft.name).map_err(DomainError::from)?;
        let color = LineColor::parse(&draft.color).map_err(DomainError::from)?;
        self.ensure_name_free(&name, None)?;
        let first = self.section(draft.up_station_id, draft.down_station_id, draft.distance)?;

        let id = LineId(self.next_line_id + 1);
        let line = Line::new(id, name, color, first)?;
        self.next_line_id = id.0;

        info!(line = %id, name = %line.name(), "created line");
        let view = LineView::from_line(&line)?;
        self.lines.insert(id, line);
        Ok(view)
    }

    /// All lines, ordered by id.
    pub fn lines(&self) -> Result<Vec<LineView>, NetworkError> {
        self.lines.values().map(LineView::from_line).collect()
    }

    pub fn line(&self, id: LineId) -> Result<LineView, NetworkError> {
        LineView::from_line(self.line_ref(id)?)
    }

    /// Rename and recolor a line.
    pub fn update_line(
        &mut self,
        id: LineId,
        name: &str,
        color: &str,
    ) -> Result<LineView, NetworkError> {
        let name = LineName::parse(name).map_err(DomainError::from)?;
        let color = LineColor::parse(color).map_err(DomainError::from)?;
        self.line_ref(id)?;
        self.ensure_name_free(&name, Some(id))?;

        let line = self.line_mut(id)?;
        line.update(name, color);
        info!(line = %id, name = %line.name(), "updated line");
        LineView::from_line(line)
    }

    pub fn delete_line(&mut self, id: LineId) -> Result<(), NetworkError> {
        self.lines
            .remove(&id)
            .ok_or(NetworkError::LineNotFound(id))?;
        info!(line = %id, "deleted line");
        Ok(())
    }

    /// Extend a line with a new section.
    pub fn add_section(
        &mut self,
        id: LineId,
        draft: SectionDraft,
    ) -> Result<LineView, NetworkError> {
        self.line_ref(id)?;
        let section = self.section(draft.up_station_id, draft.down_station_id, draft.distance)?;

        let line = self.line_mut(id)?;
        line.add_section(section)?;
        info!(
            line = %id,
            up = %draft.up_station_id,
            down = %draft.down_station_id,
            "added section"
        );
        LineView::from_line(line)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn line_ref(&self, id: LineId) -> Result<&Line, NetworkError> {
        self.lines.get(&id).ok_or(NetworkError::LineNotFound(id))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line, NetworkError> {
        self.lines.get_mut(&id).ok_or(NetworkError::LineNotFound(id))
    }

    fn section(
        &self,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<Section, NetworkError> {
        let up = self.station(up)?.clone();
        let down = self.station(down)?.clone();
        let distance = Distance::new(distance).map_err(DomainError::from)?;
        Ok(Section::new(up, down, distance).map_err(DomainError::from)?)
    }

    fn ensure_name_free(&self, name: &LineName, except: Option<LineId>) -> Result<(), NetworkError> {
        let taken = self
            .lines
            .values()
            .any(|l| l.name() == name && Some(l.id()) != except);
        if taken {
            return Err(NetworkError::DuplicateLineName(name.as_str().to_string()));
        }
        Ok(())
    }
}
