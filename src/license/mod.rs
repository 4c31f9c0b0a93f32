//! License text resolution.
//!
//! An override table entry always wins. Otherwise the source host is probed for
//! [`CANDIDATE_FILES`] in order and the first file with content is used. A
//! dependency with neither is a [`ResolveError::Unresolved`].

use thiserror::Error;

use crate::models::{DependencyRecord, OverrideTable, ResolvedLicense};
use crate::registry::SourceHost;

/// License file names in order of preference: public-domain dedication first,
/// then MIT and Apache variants, then generic names.
pub const CANDIDATE_FILES: [&str; 11] = [
    "UNLICENSE",
    "LICENSE-MIT",
    "LICENCE-MIT",
    "LICENSE-APACHE",
    "LICENCE-APACHE",
    "LICENSE",
    "LICENCE",
    "LICENSE.txt",
    "LICENSE.md",
    "LICENSE-MIT.md",
    "license-mit",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No license file found for {name} {url} {license}")]
    Unresolved {
        name: String,
        url: String,
        license: String,
    },
}

pub struct Resolver<'a, H: SourceHost> {
    overrides: &'a OverrideTable,
    host: &'a H,
}

impl<'a, H: SourceHost> Resolver<'a, H> {
    pub fn new(overrides: &'a OverrideTable, host: &'a H) -> Self {
        Self { overrides, host }
    }

    pub fn resolve(&self, record: &DependencyRecord) -> Result<ResolvedLicense, ResolveError> {
        if let Some(text) = self.overrides.get(&record.name) {
            return Ok(ResolvedLicense::Override(text.clone()));
        }

        CANDIDATE_FILES
            .iter()
            .find_map(|&file| {
                self.host
                    .fetch_candidate(&record.name, &record.version, file)
                    .map(|text| ResolvedLicense::Fetched { file, text })
            })
            .ok_or_else(|| ResolveError::Unresolved {
                name: record.name.clone(),
                url: self.host.crate_url(&record.name, &record.version),
                license: record.license.clone(),
            })
    }
}
