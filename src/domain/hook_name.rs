/// Hooks whose stdin carries event data (ref lists, rewritten commits).
const STDIN_HOOKS: &[&str] = &["pre-push", "pre-receive", "post-receive", "post-rewrite"];

/// Hooks git lets the user skip with `--no-verify`.
const VERIFIABLE_HOOKS: &[&str] = &["commit-msg", "pre-commit", "pre-rebase", "pre-push"];

/// The name of a git lifecycle hook, as passed by the hook script.
///
/// Not validated against git's list of hooks: any string is accepted and used
/// verbatim as the lookup key in the hooks config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HookName(pub(crate) String);

impl HookName {
    pub fn new(raw: impl Into<String>) -> Self {
        HookName(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key under `package.json > scripts` used by the legacy layout.
    ///
    /// Legacy script names carried no hyphens: `pre-commit` → `precommit`,
    /// `prepare-commit-msg` → `preparecommitmsg`.
    pub fn legacy_script_key(&self) -> String {
        self.0.replace('-', "")
    }

    /// Whether git pipes event data on stdin for this hook.
    pub fn receives_stdin(&self) -> bool {
        STDIN_HOOKS.contains(&self.as_str())
    }

    /// Whether the triggering git command accepts `--no-verify`.
    pub fn is_verifiable(&self) -> bool {
        VERIFIABLE_HOOKS.contains(&self.as_str())
    }
}

impl PartialEq<str> for HookName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HookName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HookName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
