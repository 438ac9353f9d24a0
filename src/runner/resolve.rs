use std::path::Path;

use crate::config::{self, ConfigError, PackageJson};
use crate::domain::HookName;

/// Which command to run for a hook, and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// From the hooks config (`husky.hooks` or `.huskyrc`).
    Current(String),
    /// From `package.json > scripts`; deprecated.
    Legacy(String),
    /// Nothing configured; the hook is a no-op.
    Unconfigured,
}

/// Look up the legacy `package.json` script for a hook in `cwd`.
///
/// A missing `package.json` yields `None`. Other read or parse failures
/// propagate.
pub fn resolve_legacy(cwd: &Path, hook_name: &HookName) -> Result<Option<String>, ConfigError> {
    let pkg = PackageJson::load(cwd)?;
    let key = hook_name.legacy_script_key();
    Ok(pkg.and_then(|pkg| pkg.script(&key).map(String::from)))
}

/// Look up the hook in the discovered hooks config.
pub fn resolve_current(cwd: &Path, hook_name: &HookName) -> Result<Option<String>, ConfigError> {
    let config = config::load(cwd)?;
    Ok(config.and_then(|config| config.command(hook_name.as_str()).map(String::from)))
}

/// Consult both sources and apply precedence: current > legacy > none.
pub fn resolve(cwd: &Path, hook_name: &HookName) -> Result<Resolution, ConfigError> {
    let legacy = resolve_legacy(cwd, hook_name)?;
    let current = resolve_current(cwd, hook_name)?;
    let resolution = pick(current, legacy);
    tracing::debug!(hook = %hook_name, ?resolution, "resolved hook command");
    Ok(resolution)
}

fn pick(current: Option<String>, legacy: Option<String>) -> Resolution {
    match (current, legacy) {
        (Some(cmd), _) => Resolution::Current(cmd),
        (None, Some(cmd)) => Resolution::Legacy(cmd),
        (None, None) => Resolution::Unconfigured,
    }
}
