//! Subway line server.
//!
//! Keeps each subway line as a set of station-to-station sections, splices
//! new sections into the right place, and serves the lines' station order
//! over HTTP.

pub mod config;
pub mod domain;
pub mod network;
pub mod web;
