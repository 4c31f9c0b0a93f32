//! Attribution report output.
//!
//! - [`markdown`] — header and per-dependency entry rendering.
//! - [`writer`] — writes the header once, then appends entries one at a time.
//! - [`terminal`] — progress lines and diagnostics on the console.

pub mod markdown;
pub mod terminal;
pub mod writer;
