use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::domain::HookName;

use super::env::ExecutionEnv;
use super::APP_NAME;

const BYPASS_HINT: &str = "(add --no-verify to bypass)";
const NO_BYPASS_HINT: &str = "(cannot be bypassed with --no-verify due to Git specs)";

/// How the hook command's process ended.
#[derive(Debug)]
pub enum ExecOutcome {
    /// The shell ran and exited. `None` when no exit code is available
    /// (terminated by a signal).
    Exited(Option<i32>),
    /// The shell could not be started or waited on.
    SpawnFailed(std::io::Error),
}

impl ExecOutcome {
    /// Exit status to report to git.
    ///
    /// A missing exit code counts as success; a spawn failure is 1.
    pub fn status(&self) -> i32 {
        match self {
            ExecOutcome::Exited(code) => code.unwrap_or(0),
            ExecOutcome::SpawnFailed(_) => 1,
        }
    }
}

/// Hint shown when a hook could not run, telling the user whether the git
/// command can be forced through.
pub fn bypass_hint(hook_name: &HookName) -> &'static str {
    if hook_name.is_verifiable() {
        BYPASS_HINT
    } else {
        NO_BYPASS_HINT
    }
}

/// Run `command` through the environment's shell as `<shell> -c <command>`.
///
/// The child receives exactly `env` and inherits stdin, stdout and stderr.
/// Blocks until it exits.
pub fn spawn_shell(cwd: &Path, command: &str, env: &ExecutionEnv) -> ExecOutcome {
    let shell = env.shell();
    tracing::debug!(shell = ?shell, cwd = %cwd.display(), "spawning hook command");

    let result = Command::new(shell)
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .env_clear()
        .envs(env.iter())
        .status();

    match result {
        Ok(status) => {
            tracing::debug!(code = ?status.code(), "hook command exited");
            ExecOutcome::Exited(status.code())
        }
        Err(e) => {
            tracing::debug!(error = %e, "hook command failed to spawn");
            ExecOutcome::SpawnFailed(e)
        }
    }
}

/// Print the banner, run the command and turn the outcome into an exit status.
///
/// Spawn failures never escape: they print a failure line with the bypass
/// hint plus the error, and yield 1. Writes to `out` are best-effort.
pub fn execute(
    cwd: &Path,
    hook_name: &HookName,
    command: &str,
    env: &ExecutionEnv,
    out: &mut dyn Write,
) -> i32 {
    let _ = writeln!(
        out,
        "{APP_NAME} > {hook_name} ({APP_NAME} v{})",
        env!("CARGO_PKG_VERSION")
    );
    let _ = out.flush();

    let outcome = spawn_shell(cwd, command, env);
    if let ExecOutcome::SpawnFailed(err) = &outcome {
        let _ = writeln!(
            out,
            "{APP_NAME} > {hook_name} hook failed {}",
            bypass_hint(hook_name)
        );
        let _ = writeln!(out, "{{ err: {err:?} }}");
    }
    outcome.status()
}
