use serde::{Deserialize, Serialize};

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a point from the `[longitude, latitude]` storage order
    pub fn from_lng_lat(coords: [f64; 2]) -> Self {
        Self {
            latitude: coords[1],
            longitude: coords[0],
        }
    }

    /// Point as `[longitude, latitude]`, the order used on the wire
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn is_origin(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// Campus building as stored in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(rename = "building")]
    pub name: String,
    #[serde(rename = "building_code")]
    pub code: String,
    #[serde(rename = "coords", with = "lng_lat")]
    pub location: GeoPoint,
    #[serde(default)]
    pub rooms: Vec<String>,
}

impl BuildingRecord {
    pub fn new(name: &str, code: &str, coords: [f64; 2], rooms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            location: GeoPoint::from_lng_lat(coords),
            rooms: rooms.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Occupancy state of a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingStatus {
    Available,
}

/// (De)serializes a [`GeoPoint`] as a `[longitude, latitude]` pair
mod lng_lat {
    use super::GeoPoint;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(point: &GeoPoint, serializer: S) -> Result<S::Ok, S::Error> {
        point.to_lng_lat().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<GeoPoint, D::Error> {
        <[f64; 2]>::deserialize(deserializer).map(GeoPoint::from_lng_lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lng_lat_order() {
        let point = GeoPoint::from_lng_lat([106.917, 47.918]);
        assert_eq!(point.latitude, 47.918);
        assert_eq!(point.longitude, 106.917);
        assert_eq!(point.to_lng_lat(), [106.917, 47.918]);
    }

    #[test]
    fn test_range_check() {
        assert!(GeoPoint::new(47.9, 106.9).is_in_range());
        assert!(GeoPoint::new(-90.0, 180.0).is_in_range());
        assert!(!GeoPoint::new(91.0, 0.0).is_in_range());
        assert!(!GeoPoint::new(0.0, -180.5).is_in_range());
    }

    #[test]
    fn test_record_coords_serialize_as_lng_lat() {
        let record = BuildingRecord::new("Library", "LIB", [106.917, 47.918], &["LIB-Study Hall"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["coords"], serde_json::json!([106.917, 47.918]));
        assert_eq!(json["building_code"], "LIB");
    }
}
