use std::path::PathBuf;

use clap::Parser;

use crate::registry::docs_rs::DEFAULT_HOST;

#[derive(Parser, Debug)]
#[command(
    name = "cargo-attribution",
    about = "Generate a dependency attribution document with full license texts",
    version
)]
pub struct Cli {
    /// Project directory containing Cargo.toml
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Override table mapping crate names to license text [default: ./attribution.json, fallback ~/.config/cargo-attribution/attribution.json]
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Report output path [default: <PATH>/ATTRIBUTION.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Base URL of the source host serving /crate/<name>/<version>/source/<file>
    #[arg(long, value_name = "URL", default_value = DEFAULT_HOST)]
    pub source_host: String,

    /// Project name used in the report header [default: package name from Cargo.toml]
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Print every rendered entry
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the start line and the per-dependency `name@version [ i / total ]` progress lines; only the final summary and errors are printed
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
