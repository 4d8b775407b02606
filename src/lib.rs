//! NUM Atlas - nearest-building lookup service for the NUM campus map
//!
//! Given an optional user position, lists the campus buildings with their
//! great-circle distance from the user, nearest first.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{rank_buildings, BuildingDirectory, DirectoryError, distance::{distance, haversine_distance}};
pub use models::{GeoPoint, BuildingRecord, BuildingResponse, LocationRequest, LocationPolicy};
