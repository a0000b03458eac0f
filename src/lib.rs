//! Dex Navigator - a terminal catalog browser for a read-only Pokémon REST API.
//!
//! This library provides the core functionality for dex-navigator: the remote
//! data source client, the detail cache, filter resolution with debounced
//! search, concurrent detail fetching and the list/detail view state.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Remote data source access behind the [`CatalogSource`] trait
//! - Category listing, filtering and detail fetching through [`Catalog`]
//! - A bounded, optionally expiring [`DetailCache`]
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    render_template,
    render_template_plain,
    strip_ansi_codes,

    // Session
    BrowseCommand,
    BrowseSession,
    CachePolicy,
    // Pipeline
    Catalog,
    CatalogSettings,
    CatalogSource,
    CategoryName,
    Debouncer,
    DetailCache,
    DetailState,
    DetailView,
    // Configuration
    DexConfig,
    // Error handling
    DexNavigatorError,
    // Data model
    EntityDetail,
    EntityReference,
    FilterQuery,
    Generation,
    GenerationCounter,
    HttpCatalog,
    ListView,
    Result,

    TemplateContext,
    // UI and formatting
    Templates,
    TEMPLATES,
};
