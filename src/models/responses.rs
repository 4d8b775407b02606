use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::BuildingStatus;

/// Building entry returned by the open-classrooms endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingResponse {
    pub building: String,
    pub building_code: String,
    pub building_status: BuildingStatus,
    pub rooms: BTreeMap<String, RoomState>,
    /// `[longitude, latitude]`
    pub coords: [f64; 2],
    /// Kilometers from the user, 0 without a user location
    pub distance: f64,
}

/// Scheduling state of a single room
///
/// `slots` stays empty until an occupancy source exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomState {
    pub slots: Vec<serde_json::Value>,
}

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub buildings: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
