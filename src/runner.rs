use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::targets::InstallTarget;
use crate::tool::InstallTool;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("target '{name}' has no source directory at {}", .path.display())]
    MissingDir { name: String, path: PathBuf },
    #[error("installing '{name}' failed with exit code {code}")]
    InstallFailed { name: String, code: i32 },
    #[error("could not launch install tool for '{name}': {reason:#}")]
    Launch {
        name: String,
        reason: anyhow::Error,
    },
}

impl RunnerError {
    /// Process exit code for this failure: the child's own code for an
    /// install failure (non-positive codes collapse to 1), 2 when a target
    /// directory is missing, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunnerError::MissingDir { .. } => 2,
            RunnerError::InstallFailed { code, .. } if *code > 0 => *code,
            _ => 1,
        }
    }
}

/// Install every target in order, stopping at the first failure.
///
/// Each target's directory is joined onto `root`; the process working
/// directory is never consulted or changed, so no iteration can disturb the
/// path resolution of the next one.
pub fn run_targets(
    root: &Path,
    targets: &[InstallTarget],
    tool: &mut dyn InstallTool,
) -> Result<RunReport, RunnerError> {
    println!("----------------------------------------------");
    println!(
        "Installing {} targets from {}",
        targets.len(),
        root.display()
    );
    println!("----------------------------------------------");

    for (idx, target) in targets.iter().enumerate() {
        println!();
        println!(
            "==> [{}/{}] Installing {} from {}",
            idx + 1,
            targets.len(),
            target.name,
            target.display_path()
        );
        println!("----------------------------------------------");

        let dir = target.dir(root);
        if !dir.is_dir() {
            return Err(RunnerError::MissingDir {
                name: target.name.clone(),
                path: dir,
            });
        }

        let code = tool
            .install(&dir, &target.extra_args)
            .map_err(|reason| RunnerError::Launch {
                name: target.name.clone(),
                reason,
            })?;

        if code != 0 {
            return Err(RunnerError::InstallFailed {
                name: target.name.clone(),
                code,
            });
        }
    }

    Ok(RunReport {
        completed: targets.len(),
        total: targets.len(),
    })
}
