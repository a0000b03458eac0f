//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, blue for headers, bright_black for hints
//! - **Standardized spacing**: Newline before and after messages
//! - **Line-based rendering**: views produce lines, this module prints them

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a hint line (commands, usage) in muted color
pub fn print_hint(message: &str) {
    println!("{}", message.bright_black());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Print pre-rendered lines followed by a blank line
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
    println!();
}
