//! Dispatching a registered command — `adhoc <name>`.

use anyhow::{Context, Result};
use console::style;

use adhoc::dispatch;
use adhoc::pathspec;
use adhoc::registry::{CommandEntry, Registry};

pub fn cmd_invoke(name: &str, command: Option<&str>, paths: Option<&str>) -> Result<()> {
    let store = super::store_path()?;
    let registry = Registry::load(&store)
        .with_context(|| format!("Failed to load registry from {}", store.display()))?;
    let stored = registry.get(name)?;

    // Overrides apply to this invocation only; the stored entry is unchanged.
    let command = match command {
        None | Some(".") => stored.command.clone(),
        Some(other) => other.to_string(),
    };
    let paths = match paths {
        None => stored.paths.clone(),
        Some(raw) => pathspec::serialize(&pathspec::normalize(raw)),
    };
    let entry = CommandEntry {
        name: stored.name.clone(),
        command,
        paths,
    };

    let requests = dispatch::launch_requests(&entry);
    for request in &requests {
        println!(
            "Running {} in {}",
            style(&request.command).cyan(),
            style(request.display_directory()).dim()
        );
    }

    let report = dispatch::dispatch_requests(&requests);
    for failure in &report.failures {
        eprintln!("{failure}");
    }
    if report.launched == 0 && !report.failures.is_empty() {
        anyhow::bail!("No directory of '{}' could be dispatched", name);
    }
    Ok(())
}
