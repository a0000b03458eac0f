use crate::core::{
    catalog::FilterQuery,
    command_init::{CommandContext, GlobalOptions},
    config::DexConfig,
    error::Result,
    model::EntityDetail,
    output::print_lines,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use colored::*;
use std::sync::Arc;

/// Command line that opens the detail sheet of `name`
pub fn detail_link(name: &str) -> String {
    format!("dex-navigator show {name}")
}

/// Thumbnail URL, only for allow-listed hosts
pub fn permitted_image(detail: &EntityDetail, config: &DexConfig) -> Option<String> {
    detail
        .sprite
        .as_ref()
        .filter(|url| config.permits_image(url))
        .map(|url| url.to_string())
}

/// One card: title with type tags, optional thumbnail and the details link
pub fn card_lines(n: usize, detail: &EntityDetail, config: &DexConfig) -> Vec<String> {
    let types: Vec<&str> = detail.type_names().collect();
    let mut lines = vec![render_template(
        TEMPLATES.card_title,
        &TemplateContext {
            n: Some(n),
            name: Some(&detail.name),
            types: Some(types.as_slice()),
            ..Default::default()
        },
    )];

    if let Some(image) = permitted_image(detail, config) {
        lines.push(render_template(
            TEMPLATES.card_image,
            &TemplateContext {
                image: Some(&image),
                ..Default::default()
            },
        ));
    }

    let link = detail_link(&detail.name);
    lines.push(render_template(
        TEMPLATES.card_link,
        &TemplateContext {
            link: Some(&link),
            ..Default::default()
        },
    ));
    lines
}

pub fn loading_lines() -> Vec<String> {
    vec![TEMPLATES.list_loading.bright_black().to_string()]
}

/// A committed listing: header and cards. An empty search result gets the
/// empty-result message; an empty listing without search text keeps the header.
pub fn listing_lines(query: &FilterQuery, entries: &[Arc<EntityDetail>], config: &DexConfig) -> Vec<String> {
    if entries.is_empty() && !query.search.is_empty() {
        return vec![TEMPLATES.list_empty.yellow().to_string()];
    }

    let search = if query.search.is_empty() { "-" } else { query.search.as_str() };
    let mut lines = vec![
        render_template(
            TEMPLATES.list_header,
            &TemplateContext {
                count: Some(entries.len()),
                category: Some(query.category_label()),
                search: Some(search),
                ..Default::default()
            },
        ),
    ];
    if entries.is_empty() {
        return lines;
    }
    lines.push(String::new());

    for (index, detail) in entries.iter().enumerate() {
        lines.extend(card_lines(index + 1, detail, config));
    }
    lines
}

pub fn execute_list(options: &GlobalOptions, category: Option<String>, search: Option<String>) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    let query = FilterQuery::new(category.as_deref(), search.as_deref().unwrap_or(""));

    print_lines(&loading_lines());
    let entries = context.catalog.list(&query);
    print_lines(&listing_lines(&query, &entries, &context.config));
    Ok(())
}
