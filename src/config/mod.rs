use crate::core::pagination::{DEFAULT_PAGE_SIZE, PageSize};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable overriding `api_base_url`.
pub const ENV_API_URL: &str = "RTIMETRACKER_API_URL";
/// Environment variable overriding the configuration directory.
pub const ENV_HOME: &str = "RTIMETRACKER_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}
fn default_storage_file() -> String {
    Config::storage_path().to_string_lossy().to_string()
}
fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE.get()
}
fn default_request_timeout() -> u64 {
    15
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            storage_file: default_storage_file(),
            default_page_size: default_page_size(),
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(ENV_HOME) {
            return PathBuf::from(custom);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimetracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimetracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetracker.conf")
    }

    /// Return the default path of the client storage (holds the session token)
    pub fn storage_path() -> PathBuf {
        Self::config_dir().join("storage.json")
    }

    /// Directory receiving the rotated log files
    pub fn log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load and validate the configuration.
    pub fn load() -> AppResult<Self> {
        let cfg = Self::load_unchecked()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from file, or return defaults if not found.
    /// The `RTIMETRACKER_API_URL` environment variable wins over the file.
    /// Values are not validated, so `init` and `config` still work on a
    /// file that needs repairing.
    pub fn load_unchecked() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(ENV_API_URL)
            && !url.trim().is_empty()
        {
            cfg.api_base_url = url;
        }

        Ok(cfg)
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        PageSize::try_from(self.default_page_size).map_err(|_| {
            AppError::Config(format!(
                "default_page_size must be one of 10, 20, 50 (found {})",
                self.default_page_size
            ))
        })?;

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    /// Page size to use when the command line does not specify one.
    pub fn page_size(&self) -> PageSize {
        PageSize::try_from(self.default_page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Write the current configuration to disk
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration directory and file.
    /// An existing configuration file is left untouched.
    pub fn init_all(api_url: Option<String>) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            return Ok(path);
        }

        let mut config = Config::default();
        if let Some(url) = api_url {
            config.api_base_url = url;
        }
        config.save()?;

        Ok(path)
    }
}
