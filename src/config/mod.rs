mod discovery;
mod package;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

pub use discovery::{load, SEARCH_PLACES};
pub use package::{PackageJson, PACKAGE_JSON};

/// Current-format configuration: a `hooks` map from hook name to command.
///
/// Found either under the `husky` key of `package.json` or in a `.huskyrc*`
/// file. Unknown keys are ignored. Command values are kept loose, like
/// `package.json > scripts`: a non-string entry is unconfigured rather than
/// a parse error.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct HooksConfig {
    #[serde(default)]
    pub hooks: Option<BTreeMap<String, Value>>,
}

impl HooksConfig {
    /// Look up the command configured for a hook.
    ///
    /// Blank and non-string commands are reported as unconfigured.
    pub fn command(&self, hook_name: &str) -> Option<&str> {
        self.hooks
            .as_ref()
            .and_then(|hooks| hooks.get(hook_name))
            .and_then(Value::as_str)
            .filter(|cmd| !cmd.trim().is_empty())
    }
}

/// Errors that can occur when reading or parsing a config file.
///
/// A missing file is never an error; callers see `None` instead.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}", path.display())]
    #[diagnostic(code(config::json), help("fix the syntax error or remove the file"))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML in {}", path.display())]
    #[diagnostic(code(config::yaml), help("fix the syntax error or remove the file"))]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read a file, mapping "not found" to `None`.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
