//! Validation and writing of registry entries.

use std::path::PathBuf;

use crate::completions::{self, BUILTINS};
use crate::errors::RegistryError;
use crate::pathspec;
use crate::registry::{CommandEntry, Registry};

/// Where the command template for a registration comes from.
///
/// The `.` shorthand on the command line is resolved into `ReuseStored`
/// before the registry is touched; the stored template never contains the
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    /// A new template to store (possibly empty), replacing any previous one.
    Template(String),
    /// Keep the template already stored under this name.
    ReuseStored,
}

impl CommandSource {
    /// Classify the raw command argument from the front end. An omitted
    /// command stores an empty template.
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            Some(".") => CommandSource::ReuseStored,
            Some(command) => CommandSource::Template(command.to_string()),
            None => CommandSource::Template(String::new()),
        }
    }
}

/// Validates and writes new or updated entries into the registry.
pub struct RegistrationService {
    store_path: PathBuf,
    completion_dir: PathBuf,
}

impl RegistrationService {
    pub fn new(store_path: PathBuf, completion_dir: PathBuf) -> Self {
        Self {
            store_path,
            completion_dir,
        }
    }

    /// Register `name` with the given command source and raw paths input,
    /// overwriting any existing entry, and flush the registry to disk.
    ///
    /// `ReuseStored` against a name that has never been registered fails
    /// with [`RegistryError::UnknownCommand`]; the shorthand cannot
    /// bootstrap a new entry.
    pub fn register(
        &self,
        registry: &mut Registry,
        name: &str,
        command: CommandSource,
        paths_input: &str,
    ) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let command = match command {
            CommandSource::Template(template) => template,
            CommandSource::ReuseStored => registry.get(name)?.command.clone(),
        };

        let paths = if paths_input.is_empty() {
            String::new()
        } else {
            pathspec::serialize(&pathspec::normalize(paths_input))
        };

        registry.insert(CommandEntry {
            name: name.to_string(),
            command,
            paths,
        });
        registry.save(&self.store_path)?;

        self.refresh_completions(registry);
        Ok(())
    }

    /// Regenerate the shell completion script from the current registry
    /// names. Skipped on Windows-style hosts; a write failure is non-fatal
    /// and never rolls back the registration.
    fn refresh_completions(&self, registry: &Registry) {
        if cfg!(windows) {
            return;
        }
        let script = completions::build_completion_script(registry.names(), BUILTINS);
        let dest = self.completion_dir.join("adhoc.sh");
        let written = std::fs::create_dir_all(&self.completion_dir)
            .and_then(|()| std::fs::write(&dest, script));
        if let Err(err) = written {
            tracing::warn!(
                path = %dest.display(),
                error = %err,
                "could not write completion script; registration is unaffected"
            );
        }
    }
}
