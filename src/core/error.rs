//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`DexNavigatorError`] which covers every failure mode of the
//! catalog pipeline. It uses `thiserror` for ergonomic error definitions and includes
//! constructor helpers for the common failure scenarios.
//!
//! # Public API
//! - [`DexNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, DexNavigatorError>`
//!
//! # Error Categories
//! - **Remote data source**: transport failures, non-success statuses, unparseable bodies
//! - **Record validation**: detail payloads that fail parse-time validation
//! - **Configuration**: unreadable, unparseable or invalid config files
//! - **Browse session**: unknown commands and missing arguments

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for dex-navigator
#[derive(Error, Debug)]
pub enum DexNavigatorError {
    // Remote data source errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Failed to parse response from {url}: {source}")]
    MalformedBody {
        url: String,
        source: serde_json::Error,
    },

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    // Record validation errors
    #[error("Invalid record for '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error("Pokémon name must not be empty")]
    EmptyName,

    // Detail view errors
    #[error("Failed to load details for '{name}': {reason}")]
    DetailUnavailable { name: String, reason: String },

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // Browse session errors
    #[error("Unknown command: '{input}'. Type 'help' to list commands.")]
    UnknownCommand { input: String },

    #[error("Missing argument for '{command}'. Usage: {usage}")]
    MissingArgument { command: String, usage: String },

    #[error("Unknown type '{name}'. Type 'types' to list the available types.")]
    UnknownCategory { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using DexNavigatorError
pub type Result<T> = std::result::Result<T, DexNavigatorError>;

impl DexNavigatorError {
    /// Create an unexpected status error
    pub fn unexpected_status(url: impl Into<String>, status: u16) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a malformed body error
    pub fn malformed_body(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedBody {
            url: url.into(),
            source,
        }
    }

    /// Create an invalid base URL error
    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid record error
    pub fn invalid_record(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a detail unavailable error
    pub fn detail_unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DetailUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown browse command error
    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand {
            input: input.into(),
        }
    }

    /// Create a missing argument error for a browse command
    pub fn missing_argument(command: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            command: command.into(),
            usage: usage.into(),
        }
    }

    /// Whether the remote data source answered with a 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status: 404, .. })
    }
}
