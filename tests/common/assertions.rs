//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating dex-navigator listing, detail and
//! error output.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for a numbered card title
pub fn has_card(index: usize, display_name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {display_name}"))
}

/// Creates a predicate that checks for the listing header count
pub fn has_count(count: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("Showing {count} Pokémon"))
}

/// Creates a predicate that checks for the empty listing message
pub fn empty_listing() -> impl Predicate<str> {
    predicates::str::contains("No Pokémon found. Try another search or type.")
}

/// Creates a predicate that checks for the detail failure message
pub fn detail_failure(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Failed to load details for '{name}'"))
}

/// Creates a predicate that checks for any rendered stat line
pub fn has_stats() -> impl Predicate<str> {
    predicates::str::contains("Stats:")
}
