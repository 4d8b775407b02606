use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::GeoPoint;

/// Optional user position posted to the open-classrooms endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LocationRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(default)]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(default)]
    pub lng: Option<f64>,
}

/// How a posted location is turned into a user position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationPolicy {
    /// Treat exactly `(0, 0)` as "no location" for older clients
    pub treat_origin_as_absent: bool,
    /// Reject out-of-range coordinates instead of ranking with them
    pub validate_coordinates: bool,
}

impl Default for LocationPolicy {
    fn default() -> Self {
        Self {
            treat_origin_as_absent: true,
            validate_coordinates: false,
        }
    }
}

impl LocationRequest {
    /// Parse a raw request body, degrading to an empty request
    ///
    /// An empty body, invalid JSON or non-numeric fields all mean the caller
    /// supplied no location.
    pub fn from_body(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        match serde_json::from_slice::<Self>(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Ignoring unreadable location body: {}", e);
                Self::default()
            }
        }
    }

    /// Resolve the posted fields into a user position
    ///
    /// Presence requires both coordinates. A single zero coordinate is a real
    /// point on the equator or prime meridian.
    pub fn user_location(&self, policy: &LocationPolicy) -> Option<GeoPoint> {
        let point = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => return None,
        };

        if policy.treat_origin_as_absent && point.is_origin() {
            return None;
        }

        Some(point)
    }
}
