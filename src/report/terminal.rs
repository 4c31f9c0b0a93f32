use std::path::Path;

use colored::*;

use crate::models::ReportEntry;

/// Observes pipeline progress. Has no influence on control flow.
pub trait Progress {
    fn start(&self, output: &Path, total: usize);
    fn resolved(&self, entry: &ReportEntry, rendered: &str, index: usize, total: usize);
    fn finish(&self, output: &Path, written: usize);
}

/// Prints progress to stdout.
///
/// `verbose` also prints each rendered entry; `quiet` suppresses everything
/// except the final summary.
pub struct ConsoleProgress {
    pub verbose: bool,
    pub quiet: bool,
}

impl Progress for ConsoleProgress {
    fn start(&self, output: &Path, total: usize) {
        if !self.quiet {
            println!("{}", start_line(output, total));
        }
    }

    fn resolved(&self, entry: &ReportEntry, rendered: &str, index: usize, total: usize) {
        if self.quiet {
            return;
        }
        for line in entry_lines(entry, rendered, index, total, self.verbose) {
            println!("{}", line);
        }
    }

    fn finish(&self, output: &Path, written: usize) {
        println!(
            "{} {} dependencies written to {}",
            "✓".green(),
            written,
            output.display()
        );
    }
}

/// First progress line, naming the report and the row count with a zero counter.
pub fn start_line(output: &Path, total: usize) -> String {
    let label = format!("Outputting certificate info into {}", output.display());
    progress_line(&label, 0, total)
}

/// Console lines for one resolved dependency. Verbose output adds the license
/// source and the rendered entry.
pub fn entry_lines(
    entry: &ReportEntry,
    rendered: &str,
    index: usize,
    total: usize,
    verbose: bool,
) -> Vec<String> {
    let mut lines = vec![progress_line(&entry.record.id(), index, total)];
    if verbose {
        lines.push(format!(" {} {}", "license:".dimmed(), entry.license));
        lines.push(rendered.to_string());
    }
    lines
}

/// `label` padded to 60 columns, followed by `[ index / total ]`.
pub fn progress_line(label: &str, index: usize, total: usize) -> String {
    format!("{:60} [ {:3} / {:3} ]", label, index, total)
}

/// Print a fatal diagnostic to stderr.
pub fn fatal(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DependencyRecord, ResolvedLicense};
    use crate::report::markdown::render_entry;

    fn entry() -> ReportEntry {
        ReportEntry {
            record: DependencyRecord {
                name: "foo".to_string(),
                version: "1.2.0".to_string(),
                authors: "Alice".to_string(),
                license: "MIT".to_string(),
            },
            url: "https://docs.rs/crate/foo/1.2.0".to_string(),
            license: ResolvedLicense::Fetched {
                file: "LICENSE-MIT",
                text: "MIT License text".to_string(),
            },
        }
    }

    #[test]
    fn test_start_line() {
        let line = start_line(Path::new("ATTRIBUTION.md"), 42);
        assert!(line.starts_with("Outputting certificate info into ATTRIBUTION.md "));
        assert!(line.ends_with(" [   0 /  42 ]"));
    }

    #[test]
    fn test_entry_lines_plain() {
        let entry = entry();
        let rendered = render_entry(&entry);
        let lines = entry_lines(&entry, &rendered, 1, 2, false);
        assert_eq!(lines, vec![progress_line("foo@1.2.0", 1, 2)]);
        assert!(!lines.iter().any(|l| l.contains("MIT License text")));
    }

    #[test]
    fn test_entry_lines_verbose_includes_rendered_entry() {
        let entry = entry();
        let rendered = render_entry(&entry);
        let lines = entry_lines(&entry, &rendered, 1, 2, true);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], progress_line("foo@1.2.0", 1, 2));
        assert!(lines[1].contains("LICENSE-MIT"));
        assert_eq!(lines[2], rendered);
    }

    #[test]
    fn test_progress_line_padding() {
        let line = progress_line("foo@1.2.0", 3, 120);
        assert_eq!(line.len(), 60 + " [   3 / 120 ]".len());
        assert!(line.starts_with("foo@1.2.0 "));
        assert!(line.ends_with(" [   3 / 120 ]"));
    }

    #[test]
    fn test_progress_line_long_label_not_truncated() {
        let label = "x".repeat(70);
        let line = progress_line(&label, 0, 5);
        assert_eq!(line, format!("{} [   0 /   5 ]", label));
    }
}
