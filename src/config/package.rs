//! `package.json` reading.
//!
//! Two things live in the manifest: the legacy `scripts` entries
//! (`"precommit": "npm test"`) and the optional `husky` section holding the
//! current-format hooks config.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{read_optional, ConfigError, HooksConfig};

pub const PACKAGE_JSON: &str = "package.json";

/// The subset of `package.json` the runner cares about.
#[derive(Debug, Default, Deserialize)]
pub struct PackageJson {
    /// Script values are kept loose: a non-string entry elsewhere in the map
    /// must not make the whole manifest unreadable.
    #[serde(default)]
    pub scripts: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub husky: Option<HooksConfig>,
}

impl PackageJson {
    /// Load `package.json` from `dir`.
    ///
    /// Returns `Ok(None)` when the file does not exist (e.g. on a `gh-pages`
    /// checkout). Read failures and invalid JSON are errors.
    pub fn load(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(PACKAGE_JSON);
        let Some(content) = read_optional(&path)? else {
            return Ok(None);
        };
        let pkg = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded package.json");
        Ok(Some(pkg))
    }

    /// Look up a legacy script by its (already hyphen-stripped) key.
    ///
    /// Blank and non-string entries are reported as unconfigured.
    pub fn script(&self, key: &str) -> Option<&str> {
        self.scripts
            .as_ref()
            .and_then(|scripts| scripts.get(key))
            .and_then(Value::as_str)
            .filter(|cmd| !cmd.trim().is_empty())
    }
}
