//! Unified color system for type tags and stats.
//!
//! Every place that prints a category name or a stat value goes through this
//! module so that "fire" is always red and a high stat is always green.
//!
//! # Public API
//! - [`get_type_color_style`]: color function for a category name
//! - [`get_colored_type`]: category name with its color applied
//! - [`format_type_tags`]: `(fire/flying)` style tag list
//! - [`get_stat_color_style`]: color function for a stat value

use colored::*;

/// Color styling for a category, as a closure that can be applied to any text
pub fn get_type_color_style(type_name: &str) -> Box<dyn Fn(&str) -> ColoredString> {
    match type_name {
        "fire" => Box::new(|text: &str| text.red()),
        "water" => Box::new(|text: &str| text.blue()),
        "grass" | "bug" => Box::new(|text: &str| text.green()),
        "electric" => Box::new(|text: &str| text.yellow()),
        "psychic" | "fairy" => Box::new(|text: &str| text.magenta()),
        "ice" | "flying" => Box::new(|text: &str| text.cyan()),
        "dragon" => Box::new(|text: &str| text.blue().bold()),
        "dark" | "ghost" => Box::new(|text: &str| text.purple()),
        "fighting" | "rock" | "ground" => Box::new(|text: &str| text.yellow().dimmed()),
        "poison" => Box::new(|text: &str| text.magenta().dimmed()),
        "steel" => Box::new(|text: &str| text.bright_black()),
        _ => Box::new(|text: &str| text.white()),
    }
}

pub fn get_colored_type(type_name: &str) -> ColoredString {
    let color_fn = get_type_color_style(type_name);
    color_fn(type_name)
}

/// Format tags like `(fire/flying)`; empty input yields an empty string
pub fn format_type_tags<'a>(types: impl IntoIterator<Item = &'a str>) -> String {
    let tags: Vec<String> = types
        .into_iter()
        .map(|name| get_colored_type(name).to_string())
        .collect();

    if tags.is_empty() {
        return String::new();
    }

    format!(
        "{}{}{}",
        "(".bright_black(),
        tags.join(&"/".bright_black().to_string()),
        ")".bright_black()
    )
}

/// Stat values: weak in red, average in yellow, strong in green
pub fn get_stat_color_style(value: u32) -> Box<dyn Fn(&str) -> ColoredString> {
    match value {
        0..=49 => Box::new(|text: &str| text.red()),
        50..=89 => Box::new(|text: &str| text.yellow()),
        _ => Box::new(|text: &str| text.green()),
    }
}
