//! Package-source hosts that serve a crate's files by name and version.
//!
//! A host answers one question: given a crate and a file name, what is the text
//! of that file, if any. Everything else (candidate order, fencing, fatality)
//! belongs to the resolver in [`crate::license`].

pub mod docs_rs;

pub trait SourceHost {
    /// Canonical listing URL for a crate version, used as the report link.
    fn crate_url(&self, name: &str, version: &str) -> String;

    /// Text of `file` in the crate's source, or `None` when the host has no such
    /// file or the request failed.
    fn fetch_candidate(&self, name: &str, version: &str, file: &str) -> Option<String>;
}
