use crate::commands::list::{listing_lines, loading_lines};
use crate::commands::show::detail_view_lines;
use crate::commands::types::type_lines;
use crate::core::{
    catalog::Catalog,
    command_init::{CommandContext, GlobalOptions},
    config::DexConfig,
    error::Result,
    output::{print_error, print_hint, print_info, print_lines, print_section_header},
    session::{BrowseCommand, BrowseSession, ListEvent, BROWSE_USAGE},
    source::CatalogSource,
};
use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Duration;

/// How long end of input waits for pending searches and refreshes to settle
const SETTLE_TIMEOUT: Duration = Duration::from_secs(120);

fn render_event(event: &ListEvent, config: &DexConfig) {
    match event {
        ListEvent::Loading { .. } => print_lines(&loading_lines()),
        ListEvent::Ready { query, entries, .. } => print_lines(&listing_lines(query, entries, config)),
    }
}

fn print_usage() {
    print_section_header("Commands");
    for (usage, description) in BROWSE_USAGE {
        print_hint(&format!("  {usage:<16} {description}"));
    }
    println!();
}

fn handle_command<S: CatalogSource + 'static>(
    session: &mut BrowseSession<S>,
    command: BrowseCommand,
    config: &DexConfig,
) {
    match command {
        BrowseCommand::Type(category) => {
            if let Err(e) = session.set_category(category) {
                print_error(&e.to_string());
            }
        }
        BrowseCommand::Search(text) => session.type_search(&text),
        BrowseCommand::Show(name) => match detail_view_lines(session.show(&name), config) {
            Ok(lines) => print_lines(&lines),
            Err(e) => print_error(&e.to_string()),
        },
        BrowseCommand::Types => {
            print_section_header("Types");
            print_lines(&type_lines(session.categories()));
        }
        BrowseCommand::Help => print_usage(),
        BrowseCommand::Quit => {}
    }
}

/// Run the interactive session over `input` until `quit` or end of input
pub fn run_browse<S, R>(catalog: Arc<Catalog<S>>, config: &DexConfig, input: R) -> Result<()>
where
    S: CatalogSource + 'static,
    R: BufRead,
{
    let render_config = config.clone();
    let mut session = BrowseSession::start(catalog, config.debounce_interval(), move |event| {
        render_event(event, &render_config)
    });

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<BrowseCommand>() {
            Ok(BrowseCommand::Quit) => {
                log::debug!("Quit requested, tearing down the session");
                return Ok(());
            }
            Ok(command) => handle_command(&mut session, command, config),
            Err(e) => print_error(&e.to_string()),
        }
    }

    log::debug!("End of input, waiting for pending work to settle");
    if !session.wait_idle(SETTLE_TIMEOUT) {
        log::warn!("Pending work did not settle within {}s", SETTLE_TIMEOUT.as_secs());
    }
    Ok(())
}

pub fn execute_browse(options: &GlobalOptions) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    print_info("Browsing the catalog. Type 'help' to list commands.");

    let stdin = io::stdin();
    run_browse(Arc::clone(&context.catalog), &context.config, stdin.lock())
}
