use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::analyzer::{parse_row, DependencySource};
use crate::license::Resolver;
use crate::models::{OverrideTable, ReportEntry};
use crate::registry::SourceHost;
use crate::report::markdown::{render_entry, render_header};
use crate::report::terminal::Progress;
use crate::report::writer::ReportWriter;

/// Where and how the report is written.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub output: PathBuf,
    pub project_name: String,
    pub date: NaiveDate,
}

/// Enumerate dependencies, resolve each license and append it to the report.
///
/// Dependencies are listed before the report is touched, so a listing failure
/// leaves any previous report intact. Rows are parsed and resolved one at a time
/// in listing order; the first malformed row or unresolved license stops the
/// run and entries already appended stay. Returns the number of entries written.
pub fn run<S, H, P>(
    source: &S,
    host: &H,
    overrides: &OverrideTable,
    progress: &P,
    settings: &RunSettings,
) -> Result<usize>
where
    S: DependencySource,
    H: SourceHost,
    P: Progress,
{
    let rows = source.list()?;
    let total = rows.len();

    progress.start(&settings.output, total);
    let writer = ReportWriter::create(
        &settings.output,
        &render_header(&settings.project_name, settings.date),
    )?;

    let resolver = Resolver::new(overrides, host);

    for (i, row) in rows.iter().enumerate() {
        // Line 1 of the listing is the discarded header
        let record = parse_row(i + 2, row)?;
        let license = resolver.resolve(&record)?;
        let entry = ReportEntry {
            url: host.crate_url(&record.name, &record.version),
            record,
            license,
        };

        let rendered = render_entry(&entry);
        progress.resolved(&entry, &rendered, i + 1, total);
        writer.append(&rendered)?;
    }

    progress.finish(writer.path(), total);
    Ok(total)
}
