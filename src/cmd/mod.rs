//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module     | Commands handled                         |
//! |------------|------------------------------------------|
//! | `register` | `Register`                               |
//! | `invoke`   | `Invoke` (bare `adhoc <name>`)           |
//! | `config`   | `Config` (`--export` / `--import`)       |
//! | `docs`     | `Docs`                                   |

pub mod config;
pub mod docs;
pub mod invoke;
pub mod register;

pub use config::cmd_config;
pub use docs::cmd_docs;
pub use invoke::cmd_invoke;
pub use register::cmd_register;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Registry store location: the `ADHOC_STORE` environment variable if set,
/// otherwise `adhoc/registry.toml` under the user configuration directory.
pub fn store_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("ADHOC_STORE") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().context("Could not determine the user configuration directory")?;
    Ok(base.join("adhoc").join("registry.toml"))
}

/// Completion script directory: the `ADHOC_COMPLETION_DIR` environment
/// variable if set, otherwise the system-wide bash completion directory.
pub fn completion_dir() -> PathBuf {
    std::env::var("ADHOC_COMPLETION_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/etc/bash_completion.d"))
}
