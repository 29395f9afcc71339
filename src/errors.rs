//! Typed error hierarchy for adhoc.
//!
//! Two top-level enums cover the two subsystems:
//! - `RegistryError` — registry lookup, validation, and store persistence failures
//! - `DispatchError` — per-directory subprocess launch failures

use thiserror::Error;

/// Errors from the command registry and its persisted store.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("Registry store at {path} is corrupt: {source}")]
    StoreCorrupt {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Command name cannot be empty")]
    EmptyName,

    #[error("Failed to access registry store at {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors from dispatching a registered command.
///
/// Each resolved directory launches independently; a failure for one
/// directory never aborts the remaining launches in the same fan-out.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to launch shell in {directory}: {source}")]
    SpawnFailed {
        directory: String,
        #[source]
        source: std::io::Error,
    },
}
