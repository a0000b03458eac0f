//! Template system for consistent output formatting.
//!
//! Templates are plain strings with `{placeholder}` markers. Rendering is a
//! single pass over the template that substitutes each placeholder with its
//! styled value from a [`TemplateContext`]. Unknown placeholders are kept as-is.
//!
//! # Public API
//! - [`Templates`]: template definitions for every output line
//! - [`TEMPLATES`]: global template instance
//! - [`TemplateContext`]: values available to templates
//! - [`render_template`]: rendering with colors
//! - [`render_template_plain`]: rendering without colors, for tests
//! - [`strip_ansi_codes`]: remove color codes
//! - [`display_name`]: capitalised, human-readable entity name

use crate::core::colors::{format_type_tags, get_stat_color_style};
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    // Listing
    pub list_header: &'static str,
    pub card_title: &'static str,
    pub card_image: &'static str,
    pub card_link: &'static str,
    pub list_loading: &'static str,
    pub list_empty: &'static str,

    // Detail sheet
    pub breadcrumb: &'static str,
    pub detail_title: &'static str,
    pub detail_image: &'static str,
    pub detail_section: &'static str,
    pub detail_item: &'static str,
    pub detail_stat: &'static str,
    pub detail_loading: &'static str,

    // Category list
    pub type_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    list_header: "Showing {count} Pokémon (type: {category}, search: {search})",
    card_title: "[{n}] {name} {types}",
    card_image: "    image:   {image}",
    card_link: "    details: {link}",
    list_loading: "Loading Pokémon...",
    list_empty: "No Pokémon found. Try another search or type.",
    breadcrumb: "Home / {name}",
    detail_title: "{name} {types}",
    detail_image: "Image: {image}",
    detail_section: "➤ {section}:",
    detail_item: "   • {item}",
    detail_stat: "   {stat_name}: {stat_value}",
    detail_loading: "Loading details for {name}...",
    type_line: "[{n}] {category}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub n: Option<usize>,
    pub count: Option<usize>,
    pub name: Option<&'a str>,
    pub types: Option<&'a [&'a str]>,
    pub category: Option<&'a str>,
    pub search: Option<&'a str>,
    pub image: Option<&'a str>,
    pub link: Option<&'a str>,
    pub section: Option<&'a str>,
    pub item: Option<&'a str>,
    pub stat_name: Option<&'a str>,
    pub stat_value: Option<u32>,
}

/// "mr-mime" -> "Mr-Mime"
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut output = String::with_capacity(template.len() + 64);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if found_closing {
            render_placeholder(&placeholder, context, &mut output);
        } else {
            // No closing brace found, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
        }
    }

    output
}

fn render_placeholder(placeholder: &str, context: &TemplateContext, output: &mut String) {
    match placeholder {
        "n" => {
            if let Some(n) = context.n {
                let _ = write!(output, "{}", n.to_string().white());
            }
        }
        "count" => {
            if let Some(count) = context.count {
                let _ = write!(output, "{}", count.to_string().white().bold());
            }
        }
        "name" => {
            if let Some(name) = context.name {
                let _ = write!(output, "{}", display_name(name).bold());
            }
        }
        "types" => {
            if let Some(types) = context.types {
                output.push_str(&format_type_tags(types.iter().copied()));
            }
        }
        "category" => {
            if let Some(category) = context.category {
                let _ = write!(output, "{}", category.cyan());
            }
        }
        "search" => {
            if let Some(search) = context.search {
                let _ = write!(output, "{}", search.cyan());
            }
        }
        "image" => {
            if let Some(image) = context.image {
                let _ = write!(output, "{}", image.blue());
            }
        }
        "link" => {
            if let Some(link) = context.link {
                let _ = write!(output, "{}", link.bright_black());
            }
        }
        "section" => {
            if let Some(section) = context.section {
                let _ = write!(output, "{}", section.blue());
            }
        }
        "item" => {
            if let Some(item) = context.item {
                let _ = write!(output, "{}", display_name(item).white());
            }
        }
        "stat_name" => {
            if let Some(stat_name) = context.stat_name {
                let _ = write!(output, "{}", display_name(stat_name).white());
            }
        }
        "stat_value" => {
            if let Some(value) = context.stat_value {
                let color_fn = get_stat_color_style(value);
                let _ = write!(output, "{}", color_fn(&value.to_string()));
            }
        }
        _ => {
            // Unknown placeholder, keep as-is
            output.push('{');
            output.push_str(placeholder);
            output.push('}');
        }
    }
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
