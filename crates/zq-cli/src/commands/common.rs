//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a JSON document into `T`.
pub fn load_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    serde_json::from_str(&source).with_context(|| format!("Failed to parse JSON: {path}"))
}

/// Write `value` as pretty JSON to `output`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, output: Option<&str>) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize output")?;

    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
