//! Registry backup and sharing — `adhoc config`.

use anyhow::{Context, Result};
use std::path::Path;

use adhoc::registry::Registry;

/// The file name used when exporting into the current directory.
const EXPORT_FILE: &str = "registry.toml";

pub fn cmd_config(export: bool, import: Option<&Path>) -> Result<()> {
    let store = super::store_path()?;
    let mut registry = Registry::load(&store)
        .with_context(|| format!("Failed to load registry from {}", store.display()))?;

    if let Some(src) = import {
        let count = registry
            .import(src)
            .with_context(|| format!("Failed to import registry from {}", src.display()))?;
        registry.save(&store)?;
        println!("Imported {} command(s) from {}", count, src.display());
    }

    if export {
        let dest = std::env::current_dir()
            .context("Failed to get current directory")?
            .join(EXPORT_FILE);
        registry.export(&dest)?;
        println!("Exported registry to {}", dest.display());
    }

    if !export && import.is_none() {
        println!("Registry store: {}", store.display());
        if registry.is_empty() {
            println!("No commands registered.");
        } else {
            for entry in registry.iter() {
                let paths = if entry.paths.is_empty() {
                    "."
                } else {
                    entry.paths.as_str()
                };
                println!("  {:<16} {}  ({})", entry.name, entry.command, paths);
            }
        }
    }

    Ok(())
}
