use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::LocationPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub location: LocationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self { name: default_service_name() }
    }
}

fn default_service_name() -> String { "NUM Atlas".to_string() }

/// Where the building table comes from; the built-in campus when unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationSettings {
    #[serde(default = "default_true")]
    pub treat_origin_as_absent: bool,
    #[serde(default)]
    pub validate_coordinates: bool,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            treat_origin_as_absent: true,
            validate_coordinates: false,
        }
    }
}

impl From<&LocationSettings> for LocationPolicy {
    fn from(settings: &LocationSettings) -> Self {
        Self {
            treat_origin_as_absent: settings.treat_origin_as_absent,
            validate_coordinates: settings.validate_coordinates,
        }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ATLAS_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ATLAS__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn location_policy(&self) -> LocationPolicy {
        LocationPolicy::from(&self.location)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ATLAS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
