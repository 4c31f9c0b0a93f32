use std::collections::HashMap;

/// Dependency name to literal license text, bypassing any network lookup.
pub type OverrideTable = HashMap<String, String>;

/// One row of the dependency listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
    /// May be empty.
    pub authors: String,
    /// SPDX expression as reported by the listing tool.
    pub license: String,
}

impl DependencyRecord {
    /// `<name>@<version>`, used in progress lines.
    pub fn id(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// License text for a single dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLicense {
    /// Taken verbatim from the override table.
    Override(String),
    /// Extracted from a license file on the source host.
    Fetched { file: &'static str, text: String },
}

impl ResolvedLicense {
    /// Body as it appears in the report. Fetched texts are fenced, overrides are not.
    pub fn body(&self) -> String {
        match self {
            ResolvedLicense::Override(text) => text.clone(),
            ResolvedLicense::Fetched { text, .. } => format!("```txt\n{}\n```", text),
        }
    }
}

impl std::fmt::Display for ResolvedLicense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedLicense::Override(_) => write!(f, "override"),
            ResolvedLicense::Fetched { file, .. } => write!(f, "{}", file),
        }
    }
}

/// A resolved dependency ready to be rendered.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub record: DependencyRecord,
    pub url: String,
    pub license: ResolvedLicense,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_body_is_verbatim() {
        let license = ResolvedLicense::Override("Custom License Body".to_string());
        assert_eq!(license.body(), "Custom License Body");
    }

    #[test]
    fn test_fetched_body_is_fenced() {
        let license = ResolvedLicense::Fetched {
            file: "LICENSE-MIT",
            text: "MIT License text".to_string(),
        };
        assert_eq!(license.body(), "```txt\nMIT License text\n```");
        assert_eq!(license.to_string(), "LICENSE-MIT");
    }
}
