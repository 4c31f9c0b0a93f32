use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::OverrideTable;

/// Default override file name, looked up in the project directory.
pub const OVERRIDES_FILE: &str = "attribution.json";

/// Default report file name, written into the project directory.
pub const OUTPUT_FILE: &str = "ATTRIBUTION.md";

/// Load the override table, searching in order:
///
/// 1. `overrides_path` — path passed via `--overrides`
/// 2. `<project_path>/attribution.json`
/// 3. `<project_path>/attribution.toml`
/// 4. `~/.config/cargo-attribution/attribution.json`
/// 5. An empty table
pub fn load_overrides(project_path: &Path, overrides_path: Option<&Path>) -> Result<OverrideTable> {
    if let Some(path) = overrides_path {
        return read_overrides(path);
    }

    let candidates = [
        Some(project_path.join(OVERRIDES_FILE)),
        Some(project_path.join("attribution.toml")),
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join("cargo-attribution")
                .join(OVERRIDES_FILE)
        }),
    ];

    for path in candidates.into_iter().flatten() {
        if path.exists() {
            return read_overrides(&path);
        }
    }

    Ok(OverrideTable::new())
}

/// Parse an override file. `.toml` files are read as TOML, anything else as JSON.
fn read_overrides(path: &Path) -> Result<OverrideTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read overrides from {}", path.display()))?;

    let table = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)
            .with_context(|| format!("invalid TOML override table in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON override table in {}", path.display()))?
    };

    Ok(table)
}

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
}

/// Name shown in the report header: `[package].name` from the project manifest,
/// or the directory name for virtual workspaces and unreadable manifests.
pub fn project_name(project_path: &Path) -> String {
    std::fs::read_to_string(project_path.join("Cargo.toml"))
        .ok()
        .and_then(|content| toml::from_str::<Manifest>(&content).ok())
        .and_then(|manifest| manifest.package)
        .map(|package| package.name)
        .or_else(|| {
            project_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "this project".to_string())
}

/// Report path: `--output` if given, else `ATTRIBUTION.md` in the project.
pub fn output_path(project_path: &Path, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_path.join(OUTPUT_FILE))
}
