//! Centralized initialization for commands that talk to the catalog API.
//!
//! Every catalog command needs the same setup: load and validate the config,
//! apply CLI overrides, build the HTTP client and wire it to a detail cache.
//! [`CommandContext::initialize`] does this once so the commands don't repeat it.
//!
//! # Initialization Steps
//! 1. **Config loading**: explicit `--config` path, or the default location
//! 2. **Overrides**: `--api-url` replaces the configured base URL
//! 3. **Validation**: the resulting config is validated again after overrides
//! 4. **Pipeline**: `HttpCatalog` + `DetailCache` + `Catalog`

use crate::core::{
    cache::{CachePolicy, DetailCache},
    catalog::{Catalog, CatalogSettings},
    config::DexConfig,
    error::Result,
    source::HttpCatalog,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config_path: Option<PathBuf>,
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Load the config and apply the CLI overrides on top of it
    pub fn load_config(&self) -> Result<DexConfig> {
        let config = DexConfig::load(self.config_path.as_deref())?
            .with_api_base_url(self.api_url.clone());
        config.validate()?;
        Ok(config)
    }
}

/// Initialized context for commands that need the catalog pipeline
pub struct CommandContext {
    pub config: DexConfig,
    pub catalog: Arc<Catalog<HttpCatalog>>,
}

impl CommandContext {
    pub fn initialize(options: &GlobalOptions) -> Result<Self> {
        let config = options.load_config()?;
        log::debug!("Using API base URL {}", config.api_base_url);

        let source = HttpCatalog::new(&config)?;
        let cache = DetailCache::new(CachePolicy::new(config.cache_capacity(), config.cache_ttl()));
        let catalog = Catalog::new(source, cache, CatalogSettings::from(&config));

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
        })
    }
}
