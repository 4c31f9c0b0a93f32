//! `cargo-attribution` — write an attribution document listing every bundled
//! dependency together with its full license text.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the override table ([`config::load_overrides`]).
//! 3. List dependencies with `cargo license` ([`analyzer`]).
//! 4. Resolve each license from the override table or the source host ([`license`], [`registry`]).
//! 5. Append one entry per dependency to the report ([`report`]).
//! 6. Exit `0`, or print the diagnostic and exit `1` on the first failure.

mod analyzer;
mod cli;
mod config;
mod license;
mod models;
mod pipeline;
mod registry;
mod report;

use anyhow::Result;
use clap::Parser;

use analyzer::cargo_license::CargoLicense;
use cli::Cli;
use config::{load_overrides, output_path, project_name};
use license::ResolveError;
use pipeline::{run, RunSettings};
use registry::docs_rs::DocsRs;
use report::terminal::{fatal, ConsoleProgress};

fn main() {
    if let Err(err) = try_main() {
        match err.downcast_ref::<ResolveError>() {
            Some(unresolved) => fatal(&unresolved.to_string()),
            None => fatal(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    // Overrides are read before any network or process activity
    let overrides = load_overrides(&path, cli.overrides.as_deref())?;

    let settings = RunSettings {
        output: output_path(&path, cli.output.as_deref()),
        project_name: cli.project_name.unwrap_or_else(|| project_name(&path)),
        date: chrono::Local::now().date_naive(),
    };

    let source = CargoLicense::new(&path);
    let host = DocsRs::new(&cli.source_host)?;
    let progress = ConsoleProgress {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    run(&source, &host, &overrides, &progress, &settings)?;
    Ok(())
}
