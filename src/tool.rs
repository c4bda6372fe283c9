use std::path::Path;
use std::process::Command;

use anyhow::{Context, anyhow};
use which::which;

/// The external "install from local path" command. The runner only needs to
/// hand it a directory and arguments and read back an exit code; tests
/// substitute a scripted implementation.
pub trait InstallTool {
    fn install(&mut self, dir: &Path, extra_args: &[String]) -> anyhow::Result<i32>;
}

pub struct CargoInstall {
    program: String,
}

impl CargoInstall {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl InstallTool for CargoInstall {
    fn install(&mut self, dir: &Path, extra_args: &[String]) -> anyhow::Result<i32> {
        let status = Command::new(&self.program)
            .arg("install")
            .arg("--force")
            .arg("--path")
            .arg(dir)
            .args(extra_args)
            .status()
            .with_context(|| {
                format!(
                    "running {} install --path {}",
                    self.program,
                    dir.display()
                )
            })?;

        // None means the child died to a signal rather than exiting.
        Ok(status.code().unwrap_or(-1))
    }
}

pub fn ensure_available(program: &str) -> anyhow::Result<()> {
    if has_command(program) {
        return Ok(());
    }

    Err(anyhow!("install tool '{program}' not found on PATH"))
}

fn has_command(cmd: &str) -> bool {
    which(cmd).is_ok()
        || Command::new(cmd)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::ensure_available;

    #[test]
    fn preflight_rejects_a_missing_program() {
        let err = ensure_available("definitely-not-an-install-tool-7f3a")
            .expect_err("lookup should fail");
        assert!(err.to_string().contains("not found on PATH"));
    }
}
