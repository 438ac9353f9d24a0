//! Hook invocation: resolve the command, prepare its environment, run it.

mod env;
mod exec;
mod resolve;

use std::io::Write;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};

use crate::config::ConfigError;
use crate::domain::HookName;

pub use env::{
    ExecutionEnv, InvocationArgs, ProcessStdin, StdinSource, GIT_PARAMS_VAR, GIT_STDIN_VAR,
};
pub use exec::{bypass_hint, execute, spawn_shell, ExecOutcome};
pub use resolve::{resolve, resolve_current, resolve_legacy, Resolution};

pub(crate) const APP_NAME: &str = "githook-runner";

/// Fatal errors that abort an invocation instead of yielding a status.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum RunError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read hook stdin")]
    #[diagnostic(code(runner::stdin))]
    Stdin(#[source] std::io::Error),
    #[error("failed to determine the working directory")]
    #[diagnostic(code(runner::cwd))]
    CurrentDir(#[source] std::io::Error),
}

/// Runs one hook invocation in a working directory.
///
/// Generic over the diagnostic writer and the stdin source; the binary uses
/// stdout and the process stdin.
pub struct Runner<W, S> {
    cwd: PathBuf,
    base_env: ExecutionEnv,
    out: W,
    stdin: S,
}

impl Runner<std::io::Stdout, ProcessStdin> {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Runner::with_io(cwd, ExecutionEnv::inherited(), std::io::stdout(), ProcessStdin)
    }
}

impl<W: Write, S: StdinSource> Runner<W, S> {
    pub fn with_io(cwd: impl Into<PathBuf>, base_env: ExecutionEnv, out: W, stdin: S) -> Self {
        Runner {
            cwd: cwd.into(),
            base_env,
            out,
            stdin,
        }
    }

    /// Resolve and run the hook, returning the exit status for git.
    ///
    /// An unconfigured hook returns 0 without spawning anything. Only config
    /// read failures and stdin read failures are errors.
    pub fn run(&mut self, args: &InvocationArgs) -> Result<i32, RunError> {
        let resolution = resolve(&self.cwd, &args.hook_name)?;

        let env = ExecutionEnv::build(self.base_env.clone(), args, &mut self.stdin)
            .map_err(RunError::Stdin)?;

        match resolution {
            Resolution::Current(command) => Ok(self.execute(&args.hook_name, &command, &env)),
            Resolution::Legacy(command) => {
                self.warn_deprecated(&args.hook_name);
                Ok(self.execute(&args.hook_name, &command, &env))
            }
            Resolution::Unconfigured => {
                tracing::debug!(hook = %args.hook_name, "no command configured, skipping");
                Ok(0)
            }
        }
    }

    fn execute(&mut self, hook_name: &HookName, command: &str, env: &ExecutionEnv) -> i32 {
        execute(&self.cwd, hook_name, command, env, &mut self.out)
    }

    fn warn_deprecated(&mut self, hook_name: &HookName) {
        let warning = deprecation_warning(hook_name);
        let _ = writeln!(
            self.out,
            "{}",
            warning.if_supports_color(Stream::Stdout, |text| text.red())
        );
    }
}

fn deprecation_warning(hook_name: &HookName) -> String {
    format!(
        "
Warning: Setting {hook_name} script in package.json > scripts will be deprecated.
Please move it to husky.hooks in package.json or .huskyrc file.

For an automatic update you can also run:
npx --no-install husky-upgrade
yarn husky-upgrade

See https://github.com/typicode/husky for more information.
"
    )
}
