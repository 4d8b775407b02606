// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, BuildingRecord, BuildingStatus};
pub use requests::{LocationRequest, LocationPolicy};
pub use responses::{BuildingResponse, RoomState, MessageResponse, HealthResponse, ErrorResponse};
