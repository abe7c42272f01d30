/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When DeskConfig schema changes
*/

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::path::PathBuf;

use customer_desk::DeskConfig;

pub fn run_init(output: PathBuf) -> Result<()> {
    println!("{}", style("Welcome to Customer Desk Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a new desk configuration.").dim()
    );

    if output.exists() {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("{}", style("Aborted; existing configuration kept.").yellow());
            return Ok(());
        }
    }

    let theme = ColorfulTheme::default();
    let mut config = DeskConfig::default();

    println!("\n{}", style("--- API ---").bold());
    config.api.base_url = Input::with_theme(&theme)
        .with_prompt("Customer API base URL")
        .default(config.api.base_url.clone())
        .validate_with(|input: &String| {
            url::Url::parse(input)
                .map(|_| ())
                .map_err(|err| format!("not a valid URL: {err}"))
        })
        .interact_text()?;

    config.api.timeout_secs = Input::with_theme(&theme)
        .with_prompt("Request timeout (seconds)")
        .default(config.api.timeout_secs)
        .validate_with(|input: &u64| {
            if *input == 0 {
                Err("timeout must be at least 1 second")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    println!("\n{}", style("--- Screens ---").bold());
    config.ui.page_size = Input::with_theme(&theme)
        .with_prompt("Customers per page")
        .default(config.ui.page_size)
        .validate_with(|input: &u32| {
            if *input == 0 {
                Err("page size must be at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let dial_codes = config.reference.dial_codes.clone();
    let default_index = dial_codes
        .iter()
        .position(|code| code == &config.ui.default_dial_code)
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt("Default dial code for phone contacts")
        .items(&dial_codes)
        .default(default_index)
        .interact()?;
    if let Some(code) = dial_codes.get(selection) {
        config.ui.default_dial_code = code.clone();
    }

    config.validate()?;
    let yaml = config.to_yaml()?;

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write config to {}", output.display()))?;

    println!("\n{}", style("SUCCESS!").bold().green());
    println!("Configuration written to: {}", style(output.display()).cyan());

    Ok(())
}
