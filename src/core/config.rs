//! Runtime configuration for the catalog pipeline.
//!
//! Every field has a default, so a missing or partial `config.json` is fine.
//! Command line flags are applied on top of whatever was loaded.

use crate::core::dirs::get_config_file;
use crate::core::error::{DexNavigatorError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
pub const DEFAULT_LIST_LIMIT: usize = 151;
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 16;
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
pub const DEFAULT_IMAGE_HOST: &str = "raw.githubusercontent.com";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DexConfig {
    pub api_base_url: String,
    pub debounce_ms: u64,
    pub default_list_limit: usize,
    pub max_concurrent_requests: usize,
    pub cache_capacity: usize,
    pub cache_ttl_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub image_hosts: Vec<String>,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_list_limit: DEFAULT_LIST_LIMIT,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: None,
            request_timeout_secs: None,
            image_hosts: vec![DEFAULT_IMAGE_HOST.to_string()],
        }
    }
}

impl DexConfig {
    /// Load the config from an explicit path, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicit path is an error.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = get_config_file()?;
                if path.exists() {
                    Self::load_from(&path)?
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| DexNavigatorError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| DexNavigatorError::config_parse_failed(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DexNavigatorError::config_write_failed(parent, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| DexNavigatorError::config_write_failed(path, e))?;

        Ok(())
    }

    /// Resolve where the config lives (explicit path wins)
    pub fn location(explicit_path: Option<&Path>) -> Result<PathBuf> {
        match explicit_path {
            Some(path) => Ok(path.to_path_buf()),
            None => get_config_file(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(DexNavigatorError::invalid_config("debounce_ms must be positive"));
        }
        if self.default_list_limit == 0 {
            return Err(DexNavigatorError::invalid_config(
                "default_list_limit must be positive",
            ));
        }
        if self.max_concurrent_requests == 0 {
            return Err(DexNavigatorError::invalid_config(
                "max_concurrent_requests must be positive",
            ));
        }
        if self.cache_capacity == 0 {
            return Err(DexNavigatorError::invalid_config("cache_capacity must be positive"));
        }
        Ok(())
    }

    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }

    pub fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cache_capacity).unwrap_or(NonZeroUsize::MIN)
    }

    /// Whether a sprite may be shown: https and an allow-listed host
    pub fn permits_image(&self, url: &Url) -> bool {
        url.scheme() == "https"
            && url
                .host_str()
                .is_some_and(|host| self.image_hosts.iter().any(|allowed| allowed == host))
    }
}
