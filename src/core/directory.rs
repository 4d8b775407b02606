use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use crate::models::BuildingRecord;

/// Errors that can occur while building the directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read building directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse building directory: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Building directory is empty")]
    Empty,

    #[error("Duplicate building code: {0}")]
    DuplicateCode(String),

    #[error("Invalid building {code:?}: {reason}")]
    InvalidRecord { code: String, reason: String },
}

/// Immutable table of campus buildings
///
/// Built once at startup and shared read-only between workers.
#[derive(Debug, Clone)]
pub struct BuildingDirectory {
    buildings: Vec<BuildingRecord>,
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    buildings: Vec<BuildingRecord>,
}

impl BuildingDirectory {
    /// Create a directory, validating every record
    pub fn new(buildings: Vec<BuildingRecord>) -> Result<Self, DirectoryError> {
        if buildings.is_empty() {
            return Err(DirectoryError::Empty);
        }

        let mut seen = HashSet::new();
        for building in &buildings {
            validate_record(building)?;
            if !seen.insert(building.code.as_str()) {
                return Err(DirectoryError::DuplicateCode(building.code.clone()));
            }
        }

        Ok(Self { buildings })
    }

    /// The NUM campus table
    pub fn builtin() -> Self {
        Self {
            buildings: vec![
                BuildingRecord::new(
                    "Main Building",
                    "MB",
                    [106.919000736241, 47.92269453067302],
                    &["MB-101", "MB-102", "MB-201", "MB-202"],
                ),
                BuildingRecord::new(
                    "Law, Engineering and Applied Science Building",
                    "LEAB",
                    [106.9185, 47.9190],
                    &["EB-101", "EB-102", "EB-201"],
                ),
                BuildingRecord::new(
                    "Library",
                    "LIB",
                    [106.9170, 47.9180],
                    &["LIB-Reading Room", "LIB-Study Hall"],
                ),
            ],
        }
    }

    /// Parse a directory from TOML `[[buildings]]` tables
    ///
    /// ```toml
    /// [[buildings]]
    /// building = "Library"
    /// building_code = "LIB"
    /// coords = [106.9170, 47.9180]  # [longitude, latitude]
    /// rooms = ["LIB-Reading Room", "LIB-Study Hall"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = toml::from_str(source)?;
        Self::new(file.buildings)
    }

    /// Read and parse a directory file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let source = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_toml_str(&source)
    }

    pub fn buildings(&self) -> &[BuildingRecord] {
        &self.buildings
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&BuildingRecord> {
        self.buildings.iter().find(|b| b.code == code)
    }
}

fn validate_record(building: &BuildingRecord) -> Result<(), DirectoryError> {
    let invalid = |reason: &str| DirectoryError::InvalidRecord {
        code: building.code.clone(),
        reason: reason.to_string(),
    };

    if building.code.trim().is_empty() {
        return Err(invalid("building code is empty"));
    }
    if building.name.trim().is_empty() {
        return Err(invalid("building name is empty"));
    }
    if !building.location.is_in_range() {
        return Err(invalid("coordinates out of range"));
    }

    Ok(())
}
