// Core algorithm exports
pub mod directory;
pub mod distance;
pub mod ranking;

pub use directory::{BuildingDirectory, DirectoryError};
pub use distance::{distance, haversine_distance};
pub use ranking::rank_buildings;
