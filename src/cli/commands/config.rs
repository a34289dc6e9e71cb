//! Config command handler

use crate::args::ConfigSubcommand;
use gradebook::config::Config;
use gradebook::{error, info};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// # Returns
/// `false` if the subcommand failed
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => {
            let stdin = io::stdin();
            handle_config_reset(&mut stdin.lock(), &mut io::stdout())
        }
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<&str>) -> bool {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return true;
    };

    match config.get(k) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("Unknown config key: '{k}'");
            false
        }
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> bool {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        return false;
    }
    if !save(config) {
        return false;
    }

    info!("Config key '{key}' updated");
    println!("✓ Set {key} = {value}");
    true
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> bool {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        return false;
    }
    if !save(config) {
        return false;
    }

    println!("✓ Reset {key} to default");
    true
}

/// Handle the config reset subcommand, asking for confirmation on `input`
pub fn handle_config_reset<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> bool {
    if !Config::get_config_file_path().exists() {
        let _ = writeln!(output, "✓ Config is already at defaults");
        return true;
    }

    if !confirm(
        input,
        output,
        "Are you sure you want to reset config to defaults? (y/n): ",
    ) {
        let _ = writeln!(output, "✗ Reset cancelled");
        return true;
    }

    if let Err(e) = Config::reset() {
        error!("Failed to remove config file: {e}");
        return false;
    }
    let _ = writeln!(output, "✓ Config reset to defaults");
    true
}

/// Print `prompt` and read a yes/no answer; anything but `y`/`yes` is a no
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> bool {
    let _ = write!(output, "{prompt}");
    output.flush().ok();

    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

fn save(config: &Config) -> bool {
    match config.save() {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save config: {e}");
            false
        }
    }
}
