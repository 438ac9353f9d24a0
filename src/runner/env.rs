//! Per-invocation environment for the hook command.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io::{IsTerminal, Read};

use crate::domain::HookName;

/// Carries the arguments git passed to the hook (e.g. the commit message file
/// for `commit-msg`).
pub const GIT_PARAMS_VAR: &str = "HUSKY_GIT_PARAMS";

/// Carries everything git wrote to the hook's stdin.
pub const GIT_STDIN_VAR: &str = "HUSKY_GIT_STDIN";

const DEFAULT_SHELL: &str = "sh";

/// The hook name and optional git parameters of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArgs {
    pub hook_name: HookName,
    pub git_params: Option<String>,
}

impl InvocationArgs {
    pub fn new(hook_name: impl Into<String>, git_params: Option<String>) -> Self {
        InvocationArgs {
            hook_name: HookName::new(hook_name),
            git_params: git_params.filter(|p| !p.is_empty()),
        }
    }

    /// Extract arguments positionally from `[program, subcommand, hook, params?]`.
    ///
    /// A missing hook name becomes the empty string, which matches no config.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rest = argv.into_iter().skip(2).map(Into::into);
        let hook_name = rest.next().unwrap_or_default();
        let git_params = rest.next();
        InvocationArgs::new(hook_name, git_params)
    }
}

/// Something that can be drained for the hook's stdin payload.
pub trait StdinSource {
    /// Read the source to EOF.
    fn read_all(&mut self) -> std::io::Result<String>;
}

impl<T: StdinSource + ?Sized> StdinSource for &mut T {
    fn read_all(&mut self) -> std::io::Result<String> {
        (**self).read_all()
    }
}

/// The process's real standard input.
///
/// Yields an empty string when stdin is a terminal, so a hook run by hand
/// does not wait for input that never comes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessStdin;

impl StdinSource for ProcessStdin {
    fn read_all(&mut self) -> std::io::Result<String> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Ok(String::new());
        }
        let mut buf = Vec::new();
        stdin.lock().read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Environment handed to the hook command.
///
/// Always starts from a copy of a base environment (normally the process's
/// own); invocation-specific keys are layered on top. The ambient process
/// environment is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl ExecutionEnv {
    /// Copy of the current process environment.
    pub fn inherited() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        ExecutionEnv {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Layer the invocation's data over `base`.
    ///
    /// `stdin` is drained only when the hook receives stdin from git; for
    /// every other hook it is left untouched.
    pub fn build(
        base: ExecutionEnv,
        args: &InvocationArgs,
        stdin: &mut dyn StdinSource,
    ) -> std::io::Result<Self> {
        let mut env = base;

        if let Some(params) = &args.git_params {
            env.set(GIT_PARAMS_VAR, params);
        }

        if args.hook_name.receives_stdin() {
            let payload = stdin.read_all()?;
            tracing::debug!(hook = %args.hook_name, bytes = payload.len(), "read hook stdin");
            env.set(GIT_STDIN_VAR, payload);
        }

        Ok(env)
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// `SHELL` from this environment, or `sh` when unset or empty.
    pub fn shell(&self) -> &OsStr {
        self.get("SHELL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| OsStr::new(DEFAULT_SHELL))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Stdin stand-in that records how often it was read.
    pub(crate) struct FakeStdin {
        pub content: String,
        pub reads: usize,
    }

    impl FakeStdin {
        pub fn new(content: &str) -> Self {
            FakeStdin {
                content: content.to_string(),
                reads: 0,
            }
        }
    }

    impl StdinSource for FakeStdin {
        fn read_all(&mut self) -> std::io::Result<String> {
            self.reads += 1;
            Ok(std::mem::take(&mut self.content))
        }
    }

    struct BrokenStdin;

    impl StdinSource for BrokenStdin {
        fn read_all(&mut self) -> std::io::Result<String> {
            Err(std::io::Error::other("stdin closed"))
        }
    }

    fn base() -> ExecutionEnv {
        ExecutionEnv::from_vars([("PATH", "/usr/bin"), ("HOME", "/home/dev")])
    }

    // --- InvocationArgs ---

    #[test]
    fn from_argv_extracts_hook_and_params() {
        let args = InvocationArgs::from_argv([
            "githook-runner",
            "run",
            "commit-msg",
            ".git/COMMIT_EDITMSG",
        ]);
        assert_eq!(args.hook_name, "commit-msg");
        assert_eq!(args.git_params.as_deref(), Some(".git/COMMIT_EDITMSG"));
    }

    #[test]
    fn from_argv_without_params() {
        let args = InvocationArgs::from_argv(["githook-runner", "run", "pre-commit"]);
        assert_eq!(args.hook_name, "pre-commit");
        assert_eq!(args.git_params, None);
    }

    #[test]
    fn from_argv_without_hook_name_is_empty() {
        let args = InvocationArgs::from_argv(["githook-runner", "run"]);
        assert_eq!(args.hook_name, "");
        assert_eq!(args.git_params, None);
    }

    #[test]
    fn from_argv_ignores_trailing_arguments() {
        let args =
            InvocationArgs::from_argv(["a", "b", "pre-push", "origin https://x", "extra"]);
        assert_eq!(args.git_params.as_deref(), Some("origin https://x"));
    }

    #[test]
    fn empty_params_are_absent() {
        let args = InvocationArgs::new("post-checkout", Some(String::new()));
        assert_eq!(args.git_params, None);
    }

    // --- ExecutionEnv::build ---

    #[test]
    fn build_keeps_base_environment() {
        let args = InvocationArgs::new("pre-commit", None);
        let env = ExecutionEnv::build(base(), &args, &mut FakeStdin::new("")).unwrap();
        assert_eq!(env.get("PATH"), Some(OsStr::new("/usr/bin")));
        assert_eq!(env.get("HOME"), Some(OsStr::new("/home/dev")));
    }

    #[test]
    fn build_sets_params_when_present() {
        let args = InvocationArgs::new("post-checkout", Some("abc def 1".into()));
        let env = ExecutionEnv::build(base(), &args, &mut FakeStdin::new("")).unwrap();
        assert_eq!(env.get(GIT_PARAMS_VAR), Some(OsStr::new("abc def 1")));
    }

    #[test]
    fn build_omits_params_when_absent() {
        let args = InvocationArgs::new("post-checkout", None);
        let env = ExecutionEnv::build(base(), &args, &mut FakeStdin::new("")).unwrap();
        assert_eq!(env.get(GIT_PARAMS_VAR), None);
    }

    #[test]
    fn build_overrides_inherited_params() {
        let mut inherited = base();
        inherited.set(GIT_PARAMS_VAR, "stale");
        let args = InvocationArgs::new("commit-msg", Some("fresh".into()));
        let env = ExecutionEnv::build(inherited, &args, &mut FakeStdin::new("")).unwrap();
        assert_eq!(env.get(GIT_PARAMS_VAR), Some(OsStr::new("fresh")));
    }

    #[test]
    fn build_reads_stdin_for_stdin_hooks() {
        for name in ["pre-push", "pre-receive", "post-receive", "post-rewrite"] {
            let mut stdin = FakeStdin::new("refs/heads/main 67890 refs/heads/main 12345\n");
            let args = InvocationArgs::new(name, None);
            let env = ExecutionEnv::build(base(), &args, &mut stdin).unwrap();
            assert_eq!(stdin.reads, 1, "{name}");
            assert_eq!(
                env.get(GIT_STDIN_VAR),
                Some(OsStr::new("refs/heads/main 67890 refs/heads/main 12345\n")),
                "{name}"
            );
        }
    }

    #[test]
    fn build_leaves_stdin_untouched_for_other_hooks() {
        for name in ["pre-commit", "commit-msg", "post-checkout", "push"] {
            let mut stdin = FakeStdin::new("should stay");
            let args = InvocationArgs::new(name, None);
            let env = ExecutionEnv::build(base(), &args, &mut stdin).unwrap();
            assert_eq!(stdin.reads, 0, "{name}");
            assert_eq!(env.get(GIT_STDIN_VAR), None, "{name}");
        }
    }

    #[test]
    fn build_forwards_empty_stdin() {
        let args = InvocationArgs::new("pre-push", None);
        let env = ExecutionEnv::build(base(), &args, &mut FakeStdin::new("")).unwrap();
        assert_eq!(env.get(GIT_STDIN_VAR), Some(OsStr::new("")));
    }

    #[test]
    fn build_propagates_stdin_error() {
        let args = InvocationArgs::new("pre-push", None);
        assert!(ExecutionEnv::build(base(), &args, &mut BrokenStdin).is_err());
    }

    // --- shell ---

    #[test]
    fn shell_defaults_to_sh() {
        assert_eq!(base().shell(), OsStr::new("sh"));
    }

    #[test]
    fn shell_empty_defaults_to_sh() {
        let env = ExecutionEnv::from_vars([("SHELL", "")]);
        assert_eq!(env.shell(), OsStr::new("sh"));
    }

    #[test]
    fn shell_from_environment() {
        let env = ExecutionEnv::from_vars([("SHELL", "/bin/bash")]);
        assert_eq!(env.shell(), OsStr::new("/bin/bash"));
    }
}
