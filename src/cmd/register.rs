//! Command registration — `adhoc register`.

use anyhow::{Context, Result};

use adhoc::register::{CommandSource, RegistrationService};
use adhoc::registry::Registry;

pub fn cmd_register(name: &str, command: Option<&str>, paths: Option<&str>) -> Result<()> {
    let store = super::store_path()?;
    let mut registry = Registry::load(&store)
        .with_context(|| format!("Failed to load registry from {}", store.display()))?;

    let service = RegistrationService::new(store, super::completion_dir());
    service.register(
        &mut registry,
        name,
        CommandSource::from_input(command),
        paths.unwrap_or(""),
    )?;

    println!("Registered '{}'", name);
    Ok(())
}
