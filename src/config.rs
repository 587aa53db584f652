use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_TAB_WIDTH: usize = 1;
pub const MAX_TAB_WIDTH: usize = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config format in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VimiConfig {
    /// Window title prefix
    pub title: String,
    /// Display width of a tab character
    pub tab_width: usize,
    pub log_file: Option<PathBuf>,
    /// env_logger filter, e.g. "info" or "vimi=debug"
    pub log_level: Option<String>,
}

impl Default for VimiConfig {
    fn default() -> Self {
        Self {
            title: "VIMI".to_string(),
            tab_width: 4,
            log_file: None,
            log_level: None,
        }
    }
}

impl VimiConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: VimiConfig = toml::from_str(content)?;
        config.tab_width = config.tab_width.clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);
        Ok(config)
    }

    /// `<config dir>/vimi/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vimi").join("config.toml"))
    }

    /// Loads an explicit config file, or the default one when it exists.
    /// A missing default file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Log destination: configured path or `<cache dir>/vimi/vimi.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("vimi").join("vimi.log")))
    }
}
