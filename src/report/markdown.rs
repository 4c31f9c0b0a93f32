use chrono::NaiveDate;

use crate::models::ReportEntry;

/// Report header, dated `date`.
pub fn render_header(project: &str, date: NaiveDate) -> String {
    format!(
        "# Dependency Attribution (last updated *{}*)\n\
         \n\
         **While this repository doesn't contain the dependencies' source code, compiled \
         distributions of {} may contain compiled/binary forms of the following direct and \
         transitive dependencies:**\n",
        date.format("%Y-%m-%d"),
        project
    )
}

/// One dependency section: a linked heading, optional authors, then the license.
pub fn render_entry(entry: &ReportEntry) -> String {
    let record = &entry.record;
    let authors = if record.authors.is_empty() {
        String::new()
    } else {
        format!(" by *{}*", record.authors)
    };

    format!(
        "\n## [`{} {}`]({}){}\n\n{}\n",
        record.name,
        record.version,
        entry.url,
        authors,
        entry.license.body()
    )
}
