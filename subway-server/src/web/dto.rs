//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, StationId};
use crate::network::{LineDraft, LineView, SectionDraft};

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    /// Display name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
pub struct LineRequest {
    /// Line name, unique across the network
    pub name: String,

    /// Display color
    pub color: String,

    /// Head station of the first section
    pub up_station_id: u64,

    /// Tail station of the first section
    pub down_station_id: u64,

    /// Distance between the two stations, in metres
    pub distance: u32,
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
pub struct SectionRequest {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
}

/// A line in responses, with its stations ordered head to tail.
#[derive(Debug, Serialize)]
pub struct LineResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,

    /// RFC 3339 creation time
    pub created_date: String,

    /// RFC 3339 time of the last change
    pub modified_date: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().0,
            name: station.name().as_str().to_string(),
        }
    }
}

impl LineResponse {
    pub fn from_view(view: &LineView) -> Self {
        Self {
            id: view.id.0,
            name: view.name.clone(),
            color: view.color.clone(),
            stations: view.stations.iter().map(StationResponse::from_station).collect(),
            created_date: view.created_at.to_rfc3339(),
            modified_date: view.modified_at.to_rfc3339(),
        }
    }
}

impl From<LineRequest> for LineDraft {
    fn from(req: LineRequest) -> Self {
        LineDraft {
            name: req.name,
            color: req.color,
            up_station_id: StationId(req.up_station_id),
            down_station_id: StationId(req.down_station_id),
            distance: req.distance,
        }
    }
}

impl From<SectionRequest> for SectionDraft {
    fn from(req: SectionRequest) -> Self {
        SectionDraft {
            up_station_id: StationId(req.up_station_id),
            down_station_id: StationId(req.down_station_id),
            distance: req.distance,
        }
    }
}
