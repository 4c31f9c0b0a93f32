use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use super::{listing_rows, AnalyzeError, DependencySource};

const ARGS: [&str; 5] = [
    "license",
    "--all-features",
    "--authors",
    "--do-not-bundle",
    "--tsv",
];

/// Lists dependencies with `cargo license`, run inside the project directory.
pub struct CargoLicense {
    project: PathBuf,
}

impl CargoLicense {
    pub fn new(project: &Path) -> Self {
        Self {
            project: project.to_path_buf(),
        }
    }

    fn command_line() -> String {
        format!("cargo {}", ARGS.join(" "))
    }
}

impl DependencySource for CargoLicense {
    fn list(&self) -> Result<Vec<String>> {
        let output = Command::new("cargo")
            .args(ARGS)
            .current_dir(&self.project)
            .output()
            .with_context(|| format!("failed to run `{}`", Self::command_line()))?;

        if !output.status.success() {
            return Err(AnalyzeError::CommandFailed {
                command: Self::command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(listing_rows(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        assert_eq!(
            CargoLicense::command_line(),
            "cargo license --all-features --authors --do-not-bundle --tsv"
        );
    }
}
