use thiserror::Error;

use crate::models::DependencyRecord;

pub mod cargo_license;

/// Produces the ordered, unparsed rows of the dependency listing.
pub trait DependencySource {
    /// Rows after the header line, in listing order. Parsing happens row by row
    /// in the pipeline so that a malformed row fails only when it is reached.
    fn list(&self) -> anyhow::Result<Vec<String>>;
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("malformed row {line_number}: expected at least 5 tab-separated fields, found {fields}: {line:?}")]
    MalformedRow {
        line_number: usize,
        line: String,
        fields: usize,
    },
}

/// Rows of tab-separated listing output, with the header line discarded.
pub fn listing_rows(output: &str) -> Vec<String> {
    output.lines().skip(1).map(str::to_string).collect()
}

/// Split one row into a [`DependencyRecord`], trimming every field. Field 3 is
/// not used. `line_number` counts the header as line 1.
pub fn parse_row(line_number: usize, line: &str) -> Result<DependencyRecord, AnalyzeError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 5 {
        return Err(AnalyzeError::MalformedRow {
            line_number,
            line: line.to_string(),
            fields: fields.len(),
        });
    }

    Ok(DependencyRecord {
        name: fields[0].trim().to_string(),
        version: fields[1].trim().to_string(),
        authors: fields[2].trim().to_string(),
        license: fields[4].trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_trims_fields() {
        let record = parse_row(2, " foo \t 1.2.0\tAlice \tMIT-ext\t MIT ").unwrap();
        assert_eq!(record.name, "foo");
        assert_eq!(record.version, "1.2.0");
        assert_eq!(record.authors, "Alice");
        assert_eq!(record.license, "MIT");
    }

    #[test]
    fn test_parse_row_ignores_trailing_fields() {
        let record = parse_row(2, "bar\t0.1.0\t\tcustom\tCUSTOM\textra\tmore").unwrap();
        assert_eq!(record.name, "bar");
        assert_eq!(record.authors, "");
        assert_eq!(record.license, "CUSTOM");
    }

    #[test]
    fn test_parse_row_too_few_fields() {
        let err = parse_row(7, "baz\t1.0.0\tBob").unwrap_err();
        match err {
            AnalyzeError::MalformedRow {
                line_number,
                fields,
                ..
            } => {
                assert_eq!(line_number, 7);
                assert_eq!(fields, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_row_blank_line() {
        assert!(matches!(
            parse_row(4, ""),
            Err(AnalyzeError::MalformedRow { fields: 1, .. })
        ));
    }

    #[test]
    fn test_listing_rows_drops_header_only() {
        let output = "name\tversion\tauthors\trepository\tlicense\tlicense_file\tdescription\n\
                      foo\t1.2.0\tAlice\tMIT-ext\tMIT\n\
                      \n\
                      bar\t0.1.0\t\tcustom\tCUSTOM\n";
        let rows = listing_rows(output);
        assert_eq!(
            rows,
            vec![
                "foo\t1.2.0\tAlice\tMIT-ext\tMIT".to_string(),
                String::new(),
                "bar\t0.1.0\t\tcustom\tCUSTOM".to_string(),
            ]
        );
    }
}
