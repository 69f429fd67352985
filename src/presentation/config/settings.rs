use std::path::PathBuf;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

use super::Environment;

const MEBIBYTE: usize = 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_mb: usize,
}

impl ServerSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(MEBIBYTE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub reference_audio_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    pub ffmpeg_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_body_mb: 64,
            },
            storage: StorageSettings {
                reference_audio_dir: PathBuf::from("reference_audio"),
            },
            extraction: ExtractionSettings {
                ffmpeg_path: "ffmpeg".to_string(),
            },
            logging: LoggingSettings {
                level: "info,vocalref=debug,tower_http=debug".to_string(),
                enable_json: false,
            },
        }
    }
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.<env>.*` if present, then
    /// `APP_`-prefixed variables such as `APP_SERVER__PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
