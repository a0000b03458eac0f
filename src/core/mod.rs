//! Core functionality for the dex-navigator tool.
//!
//! This module provides the building blocks of the catalog pipeline: the
//! remote data source, the detail cache, filter resolution, debouncing,
//! view state and the UI components.

pub mod cache;
pub mod catalog;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod debounce;
pub mod dirs;
pub mod error;
pub mod generation;
pub mod model;
pub mod output;
pub mod session;
pub mod source;
pub mod templates;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{DexNavigatorError, Result};

// === Configuration ===
pub use command_init::{CommandContext, GlobalOptions};
pub use config::DexConfig;

// === Data model ===
// Entity references, parsed detail records and their parts
pub use model::{CategoryName, EntityDetail, EntityReference, Stat, TypeTag};

// === Remote data source ===
// Trait seam plus the HTTP implementation
pub use source::{CatalogSource, HttpCatalog};

// === Pipeline ===
// Detail cache, type lister, filter resolver and detail fetcher
pub use cache::{CachePolicy, DetailCache};
pub use catalog::{Catalog, CatalogSettings, FilterQuery};

// === Timing and ordering ===
pub use debounce::Debouncer;
pub use generation::{Generation, GenerationCounter};

// === Views and interactive session ===
pub use session::{BrowseCommand, BrowseSession, ListController, ListEvent};
pub use view::{DetailState, DetailView, ListState, ListView};

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    display_name, render_template, render_template_plain, strip_ansi_codes, TemplateContext,
    Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{format_type_tags, get_colored_type, get_stat_color_style, get_type_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_error, print_hint, print_info, print_lines, print_section_header, print_success,
};
