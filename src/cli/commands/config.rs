//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use survey_hub::config::Config;

/// Dispatch config subcommands
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print one value, or the whole configuration when no key is given
pub fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(&k)
                .ok_or_else(|| format!("✗ Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

/// Set a value and persist the config file
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Restore one value to its default and persist the config file
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| format!("✗ {e}"))?;
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Delete the config file after confirmation
pub fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
