use clap::{Parser, Subcommand};
use dex_navigator::commands::*;
use dex_navigator::core::{command_init::GlobalOptions, error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dex-navigator")]
#[command(about = "Browse, filter and inspect Pokémon from the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Override the API base URL (e.g. "https://pokeapi.co/api/v2")
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Read the configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available types
    Types,
    /// List Pokémon, optionally filtered by type and name
    List {
        /// Only show members of this type (e.g. "fire")
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        category: Option<String>,
        /// Only show names containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the detail sheet of one Pokémon
    Show {
        /// Pokémon name (e.g. "pikachu")
        name: String,
    },
    /// Interactive session: filter, search and inspect from stdin
    Browse,
    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = GlobalOptions {
        config_path: cli.config,
        api_url: cli.api_url,
    };

    let outcome = match cli.command {
        Commands::Types => execute_types(&options),
        Commands::List { category, search } => execute_list(&options, category, search),
        Commands::Show { name } => execute_show(&options, &name),
        Commands::Browse => execute_browse(&options),
        Commands::Config { init } => execute_config(&options, init),
    };

    if let Err(e) = outcome {
        log::debug!("Command failed: {e:?}");
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
