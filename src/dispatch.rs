//! Expansion of a registry entry into per-directory subprocess launches.
//!
//! Dispatch is fire-and-forget: every resolved directory gets its own
//! detached shell invocation of the stored command, started without
//! waiting for any other to finish. The parent never blocks on, cancels,
//! or times out a launched subprocess; once dispatched, lifecycle is fully
//! decoupled from the parent's own exit.

use std::path::PathBuf;

use tokio::process::Command;

use crate::errors::DispatchError;
use crate::pathspec;
use crate::registry::CommandEntry;

/// Where and what to run for a single resolved directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Working directory for the shell; `None` inherits the parent's.
    pub directory: Option<PathBuf>,
    /// Command line handed to the shell as-is. No quoting or escaping is
    /// applied beyond stripping stray single-quote characters — the
    /// injection risk of unsanitized templates is an accepted tradeoff.
    pub command: String,
}

impl LaunchRequest {
    /// The directory as shown to the user; `.` for the inherited one.
    pub fn display_directory(&self) -> String {
        self.directory
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| ".".to_string())
    }
}

/// Outcome of fanning an entry out across its directories. Launch failures
/// are independent; one directory failing never prevents the others from
/// being attempted.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub launched: usize,
    pub failures: Vec<DispatchError>,
}

/// Expand an entry's path spec into one launch request per directory.
pub fn launch_requests(entry: &CommandEntry) -> Vec<LaunchRequest> {
    let command = entry.command.replace('\'', "");
    pathspec::parse(&entry.paths)
        .into_iter()
        .map(|dir| LaunchRequest {
            directory: if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            },
            command: command.clone(),
        })
        .collect()
}

/// Launch every request as an independent detached subprocess.
pub fn dispatch_requests(requests: &[LaunchRequest]) -> DispatchReport {
    let mut report = DispatchReport::default();
    for request in requests {
        match spawn_detached(request) {
            Ok(()) => report.launched += 1,
            Err(err) => report.failures.push(err),
        }
    }
    report
}

/// Expand and launch a registry entry in one step.
pub fn dispatch(entry: &CommandEntry) -> DispatchReport {
    dispatch_requests(&launch_requests(entry))
}

fn spawn_detached(request: &LaunchRequest) -> Result<(), DispatchError> {
    let (shell, flag) = if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };
    let mut command = Command::new(shell);
    command.arg(flag).arg(&request.command);
    if let Some(dir) = &request.directory {
        command.current_dir(dir);
    }
    tracing::debug!(
        directory = %request.display_directory(),
        command = %request.command,
        "launching"
    );
    // The child handle is dropped without waiting; the process outlives it.
    command
        .spawn()
        .map(drop)
        .map_err(|source| DispatchError::SpawnFailed {
            directory: request.display_directory(),
            source,
        })
}
