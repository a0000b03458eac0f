//! Consolidated test utilities for dex-navigator
//!
//! Integration tests run the real binary against a local stub of the catalog
//! API, with an isolated config directory and colors disabled.

pub mod assertions;
pub mod fixtures;
pub mod server;
