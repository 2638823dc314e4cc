//! Application configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file,
//! then `TMDB_SEARCH__<SECTION>__<KEY>` environment variables.

use crate::search::{ProviderConfig, TMDB_BASE_URL};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ENV_PREFIX: &str = "TMDB_SEARCH";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub images: ImageConfig,
    pub search: SearchConfig,
    pub player: PlayerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub bearer_token: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    /// Base for list and detail posters
    pub standard_base_url: String,
    /// Base for full resolution backdrops
    pub original_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub sample_video_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl AppConfig {
    /// Load from `path` if given, else from the user config directory
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).or_else(default_path);
        let config = Self::build(path.as_deref(), Environment::with_prefix(ENV_PREFIX).separator("__"))?;
        config.validate()?;
        Ok(config)
    }

    fn build(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("api.base_url", TMDB_BASE_URL)?
            .set_default("api.bearer_token", option_env!("TMDB_BEARER_TOKEN").unwrap_or_default())?
            .set_default("api.connect_timeout_secs", 30)?
            .set_default("api.read_timeout_secs", 30)?
            .set_default("images.standard_base_url", "https://image.tmdb.org/t/p/w500")?
            .set_default("images.original_base_url", "https://image.tmdb.org/t/p/original")?
            .set_default("search.debounce_ms", 500)?
            .set_default(
                "player.sample_video_url",
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            )?
            .set_default("log.filter", "info")?
            .set_default("log.json", false)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        Ok(builder.add_source(env).build()?.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.api.bearer_token.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.bearer_token",
                reason: format!(
                    "must not be empty (set it in the config file or {ENV_PREFIX}__API__BEARER_TOKEN)"
                ),
            });
        }
        if self.api.connect_timeout_secs == 0 || self.api.read_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.*_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.api.base_url.clone())
            .with_bearer_token(self.api.bearer_token.clone())
            .with_timeouts(
                Duration::from_secs(self.api.connect_timeout_secs),
                Duration::from_secs(self.api.read_timeout_secs),
            )
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tmdb-search").join("config.toml"))
}
