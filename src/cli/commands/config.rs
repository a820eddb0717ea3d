use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use log::info;
use msgraph_client::config::{self, Config};
use std::path::Path;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the effective configuration
    Show,
    /// Set a configuration value
    Set {
        /// Setting name, e.g. timeout_secs or monitoring.log_level
        key: String,
        /// Setting value
        value: String,
    },
    /// Print the config file location
    Path,
}

pub fn config_command(args: ConfigCommands) -> Result<()> {
    let config_path = Config::get_config_path()?;
    match args.command {
        ConfigSubcommands::Show => show(&config_path),
        ConfigSubcommands::Set { key, value } => set(&config_path, &key, &value),
        ConfigSubcommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn show(config_path: &Path) -> Result<()> {
    info!("Showing config");
    let config = Config::load()?;

    println!("{} {}", "Config file:".bold(), config_path.display());
    if !config_path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    print!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);

    println!();
    let token = if Config::access_token().is_ok() {
        "set".green()
    } else {
        "not set".red()
    };
    println!("{}: {}", config::ACCESS_TOKEN_ENV, token);
    Ok(())
}

fn set(config_path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    config.set(key, value)?;
    config.save_to(config_path)?;
    println!("{} {} = {}", "✓".green(), key.bold(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_persists_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        set(&path, "monitoring.slow_request_ms", "250").unwrap();
        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.monitoring.slow_request_ms, 250);
        assert_eq!(saved.timeout_secs, Config::default().timeout_secs);

        assert!(set(&path, "bogus", "1").is_err());
    }
}
