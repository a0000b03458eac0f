use crate::core::{
    command_init::GlobalOptions,
    config::DexConfig,
    error::Result,
    output::{print_hint, print_info, print_section_header, print_success},
};

pub fn execute_config(options: &GlobalOptions, init: bool) -> Result<()> {
    let path = DexConfig::location(options.config_path.as_deref())?;

    if init {
        if path.exists() {
            print_info(&format!("Config file already exists at {}", path.display()));
            return Ok(());
        }
        DexConfig::default().save_to(&path)?;
        log::debug!("Wrote default config to {}", path.display());
        print_success(&format!("Wrote default config to {}", path.display()));
        return Ok(());
    }

    let config = if path.exists() {
        options.load_config()?
    } else {
        log::debug!("No config file at {}, showing defaults", path.display());
        DexConfig::default().with_api_base_url(options.api_url.clone())
    };

    print_section_header(&format!("Config ({})", path.display()));
    println!("{}", serde_json::to_string_pretty(&config)?);
    if !path.exists() {
        print_hint("\nNo config file yet; run `dex-navigator config --init` to create one.");
    }
    Ok(())
}
