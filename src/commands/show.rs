use crate::commands::list::permitted_image;
use crate::core::{
    catalog::Catalog,
    command_init::{CommandContext, GlobalOptions},
    config::DexConfig,
    error::{DexNavigatorError, Result},
    model::EntityDetail,
    output::print_lines,
    source::CatalogSource,
    templates::{render_template, TemplateContext, TEMPLATES},
    view::{DetailState, DetailView},
};
use colored::*;

/// Upper bound for types, abilities and moves on the detail sheet
pub const DETAIL_LIST_LIMIT: usize = 6;

/// Resolve a `Loading` detail view through the catalog (and its cache)
pub fn load_detail_view<S: CatalogSource>(catalog: &Catalog<S>, view: &mut DetailView) {
    if *view.state() == DetailState::Loading {
        view.complete(catalog.detail(view.name()));
    }
}

fn section_lines(section: &str, items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![render_template(
        TEMPLATES.detail_section,
        &TemplateContext {
            section: Some(section),
            ..Default::default()
        },
    )];
    lines.extend(items.iter().take(DETAIL_LIST_LIMIT).map(|item| {
        render_template(
            TEMPLATES.detail_item,
            &TemplateContext {
                item: Some(item),
                ..Default::default()
            },
        )
    }));
    lines
}

/// The full detail sheet of a loaded entity
pub fn detail_lines(detail: &EntityDetail, config: &DexConfig) -> Vec<String> {
    let types: Vec<&str> = detail.type_names().take(DETAIL_LIST_LIMIT).collect();
    let mut lines = vec![
        render_template(
            TEMPLATES.breadcrumb,
            &TemplateContext {
                name: Some(&detail.name),
                ..Default::default()
            },
        )
        .bright_black()
        .to_string(),
        String::new(),
        render_template(
            TEMPLATES.detail_title,
            &TemplateContext {
                name: Some(&detail.name),
                types: Some(types.as_slice()),
                ..Default::default()
            },
        ),
    ];

    if let Some(image) = permitted_image(detail, config) {
        lines.push(render_template(
            TEMPLATES.detail_image,
            &TemplateContext {
                image: Some(&image),
                ..Default::default()
            },
        ));
    }

    if !detail.stats.is_empty() {
        lines.push(render_template(
            TEMPLATES.detail_section,
            &TemplateContext {
                section: Some("Stats"),
                ..Default::default()
            },
        ));
        lines.extend(detail.stats.iter().map(|stat| {
            render_template(
                TEMPLATES.detail_stat,
                &TemplateContext {
                    stat_name: Some(&stat.name),
                    stat_value: Some(stat.base_value),
                    ..Default::default()
                },
            )
        }));
    }

    lines.extend(section_lines("Abilities", &detail.abilities));
    lines.extend(section_lines("Moves", &detail.moves));
    lines
}

/// Lines for a detail view; a failed view is reported as an error instead
pub fn detail_view_lines(view: &DetailView, config: &DexConfig) -> Result<Vec<String>> {
    match view.state() {
        DetailState::Loading => Ok(vec![render_template(
            TEMPLATES.detail_loading,
            &TemplateContext {
                name: Some(view.name()),
                ..Default::default()
            },
        )
        .bright_black()
        .to_string()]),
        DetailState::Success(detail) => Ok(detail_lines(detail, config)),
        DetailState::Failure(reason) => Err(DexNavigatorError::detail_unavailable(
            view.name(),
            reason.as_str(),
        )),
    }
}

pub fn execute_show(options: &GlobalOptions, name: &str) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(DexNavigatorError::EmptyName);
    }

    let mut view = DetailView::navigate(name);
    load_detail_view(&context.catalog, &mut view);
    print_lines(&detail_view_lines(&view, &context.config)?);
    Ok(())
}
