//! Station and line management.
//!
//! Owns every station and line, resolves the ids clients send into domain
//! values, and routes section changes into each line's topology.

mod error;
mod service;

pub use error::NetworkError;
pub use service::{LineDraft, LineView, SectionDraft, SubwayNetwork};
