//! # File I/O Helpers
//!
//! Small deserialization/serialization wrappers shared by the handlers.
//! Every error carries the path it came from, because a bare serde error
//! with no file name is useless at the terminal.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;

use paie_engine::Payslip;

/// Read and parse a YAML file.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Read a payslip record from a JSON file.
pub fn read_payslip(path: &Path) -> anyhow::Result<Payslip> {
    read_json(path)
}

/// Write `value` as pretty-printed JSON to `path`, or to stdout if no
/// path was given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    match path {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

/// Write raw bytes to `path`, or to stdout if no path was given.
pub fn write_bytes(bytes: &[u8], path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(bytes)
                .context("writing to stdout")
        }
    }
}
