use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Append-only report file. Every write opens and closes the file, so an
/// interrupted run leaves the header and all completed entries on disk.
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Truncate `path` and write `header` to it.
    pub fn create(path: &Path, header: &str) -> Result<Self> {
        std::fs::write(path, header.as_bytes())
            .with_context(|| format!("failed to write report header to {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn append(&self, entry: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {} for appending", self.path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("failed to append to {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ATTRIBUTION.md");
        std::fs::write(&path, "stale content from a previous run\n").unwrap();

        ReportWriter::create(&path, "# Header\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Header\n");
    }

    #[test]
    fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ATTRIBUTION.md");

        let writer = ReportWriter::create(&path, "# Header\n").unwrap();
        writer.append("\n## first\n").unwrap();
        writer.append("\n## second\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(writer.path()).unwrap(),
            "# Header\n\n## first\n\n## second\n"
        );
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ATTRIBUTION.md");
        assert!(ReportWriter::create(&path, "# Header\n").is_err());
    }
}
