use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// One local source tree to hand to the install tool, plus the extra
/// arguments that installation needs.
#[derive(Debug, Clone, Serialize)]
pub struct InstallTarget {
    pub name: String,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl InstallTarget {
    fn new(name: &str, path: &[&str], extra_args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            path: path.iter().map(|s| s.to_string()).collect(),
            extra_args: extra_args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Absolute directory of this target, joined segment by segment onto
    /// `root`. An empty path means the root itself.
    pub fn dir(&self, root: &Path) -> PathBuf {
        let mut dir = root.to_path_buf();
        for segment in &self.path {
            dir.push(segment);
        }
        dir
    }

    pub fn display_path(&self) -> String {
        if self.path.is_empty() {
            ".".to_string()
        } else {
            self.path.join("/")
        }
    }
}

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("target has an empty name")]
    EmptyName,
    #[error("duplicate target name '{0}'")]
    DuplicateName(String),
    #[error("target '{name}' has an invalid path segment '{segment}'")]
    InvalidSegment { name: String, segment: String },
}

const PLUGINS: [&str; 6] = [
    "inc",
    "gstat",
    "query",
    "example",
    "custom_values",
    "formats",
];

/// The fixed install sequence: the primary crate at the checkout root,
/// then each bundled plugin in declaration order.
pub fn default_targets() -> Vec<InstallTarget> {
    let mut targets = vec![InstallTarget::new(
        "primary",
        &[],
        &["--features=dataframe"],
    )];

    for plugin in PLUGINS {
        let crate_dir = format!("nu_plugin_{plugin}");
        targets.push(InstallTarget::new(plugin, &["crates", &crate_dir], &[]));
    }

    targets
}

pub fn validate_targets(targets: &[InstallTarget]) -> Result<(), TargetError> {
    let mut seen = Vec::new();

    for target in targets {
        if target.name.trim().is_empty() {
            return Err(TargetError::EmptyName);
        }

        if seen.contains(&target.name.as_str()) {
            return Err(TargetError::DuplicateName(target.name.clone()));
        }
        seen.push(target.name.as_str());

        for segment in &target.path {
            validate_segment(&target.name, segment)?;
        }
    }

    Ok(())
}

fn validate_segment(name: &str, segment: &str) -> Result<(), TargetError> {
    let escapes = segment == ".." || segment.contains('/') || segment.contains('\\');
    if segment.trim().is_empty() || escapes {
        return Err(TargetError::InvalidSegment {
            name: name.to_string(),
            segment: segment.to_string(),
        });
    }

    Ok(())
}
