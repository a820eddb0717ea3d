pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use anyhow::{Context, Result};
use std::io::Read;

/// Read a file, or stdin when `source` is `-`
pub fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read file: {}", source))
    }
}
