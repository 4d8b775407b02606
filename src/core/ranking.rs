use std::collections::BTreeMap;
use crate::core::directory::BuildingDirectory;
use crate::core::distance::distance;
use crate::models::{BuildingRecord, BuildingResponse, BuildingStatus, GeoPoint, RoomState};

/// Rank every building in the directory by distance from the user
///
/// # Arguments
/// * `directory` - The building table to rank
/// * `user_location` - The user's position, if one was supplied
///
/// # Returns
/// One response per building. Without a location every distance is 0 and
/// the table order is kept; with a location the list is sorted nearest
/// first, ties keeping table order.
pub fn rank_buildings(
    directory: &BuildingDirectory,
    user_location: Option<GeoPoint>,
) -> Vec<BuildingResponse> {
    let mut responses: Vec<BuildingResponse> = directory
        .buildings()
        .iter()
        .map(|building| {
            let distance_km = user_location
                .map(|user| distance(user, building.location))
                .unwrap_or(0.0);
            to_response(building, distance_km)
        })
        .collect();

    if user_location.is_some() {
        // `sort_by` is stable
        responses.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    }

    responses
}

/// Shape a directory record into its per-request response
fn to_response(building: &BuildingRecord, distance_km: f64) -> BuildingResponse {
    let rooms: BTreeMap<String, RoomState> = building
        .rooms
        .iter()
        .map(|room| (room.clone(), RoomState::default()))
        .collect();

    BuildingResponse {
        building: building.name.clone(),
        building_code: building.code.clone(),
        building_status: BuildingStatus::Available,
        rooms,
        coords: building.location.to_lng_lat(),
        distance: distance_km,
    }
}
