use crate::core::{
    command_init::{CommandContext, GlobalOptions},
    error::Result,
    model::CategoryName,
    output::{print_lines, print_section_header},
    templates::{render_template, TemplateContext, TEMPLATES},
};

/// The implicit "no filter" option, listed before the fetched categories
pub const ALL_CATEGORIES: &str = "all";

/// Numbered category lines; "all" is always entry 0
pub fn type_lines(categories: &[CategoryName]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES)
        .chain(categories.iter().map(String::as_str))
        .enumerate()
        .map(|(n, category)| {
            let context = TemplateContext {
                n: Some(n),
                category: Some(category),
                ..Default::default()
            };
            render_template(TEMPLATES.type_line, &context)
        })
        .collect()
}

pub fn execute_types(options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    let categories = context.catalog.category_names();
    log::debug!("Fetched {} categories", categories.len());

    print_section_header("Types");
    print_lines(&type_lines(&categories));
    Ok(())
}
