//! Hooks config discovery.
//!
//! Walks from the working directory up to the filesystem root. In each
//! directory the search places are tried in order and the first hit wins.

use std::path::Path;

use super::package::{PackageJson, PACKAGE_JSON};
use super::{read_optional, ConfigError, HooksConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// The `husky` key of `package.json`.
    PackageKey,
    Json,
    Yaml,
}

/// File names checked in each directory, in priority order.
pub const SEARCH_PLACES: &[&str] = &[
    PACKAGE_JSON,
    ".huskyrc",
    ".huskyrc.json",
    ".huskyrc.yaml",
    ".huskyrc.yml",
];

fn format_of(place: &str) -> Format {
    match place {
        PACKAGE_JSON => Format::PackageKey,
        ".huskyrc.json" => Format::Json,
        // `.huskyrc` may hold either; JSON documents are valid YAML.
        _ => Format::Yaml,
    }
}

/// Find and parse the hooks config that applies to `cwd`.
///
/// Returns `Ok(None)` when no search place exists anywhere up the tree.
/// Empty rc files and a `package.json` without a `husky` key are skipped.
pub fn load(cwd: &Path) -> Result<Option<HooksConfig>, ConfigError> {
    for dir in cwd.ancestors() {
        for place in SEARCH_PLACES {
            if let Some(config) = load_place(dir, place)? {
                tracing::debug!(path = %dir.join(place).display(), "found hooks config");
                return Ok(Some(config));
            }
        }
    }
    tracing::debug!(cwd = %cwd.display(), "no hooks config found");
    Ok(None)
}

fn load_place(dir: &Path, place: &str) -> Result<Option<HooksConfig>, ConfigError> {
    match format_of(place) {
        Format::PackageKey => Ok(PackageJson::load(dir)?.and_then(|pkg| pkg.husky)),
        Format::Json => {
            let path = dir.join(place);
            let Some(content) = read_rc(&path)? else {
                return Ok(None);
            };
            serde_json::from_str(&content)
                .map(Some)
                .map_err(|source| ConfigError::Json { path, source })
        }
        Format::Yaml => {
            let path = dir.join(place);
            let Some(content) = read_rc(&path)? else {
                return Ok(None);
            };
            serde_yaml::from_str(&content)
                .map(Some)
                .map_err(|source| ConfigError::Yaml { path, source })
        }
    }
}

/// Read an rc file; missing and blank files are both `None`.
fn read_rc(path: &Path) -> Result<Option<String>, ConfigError> {
    Ok(read_optional(path)?.filter(|content| !content.trim().is_empty()))
}
