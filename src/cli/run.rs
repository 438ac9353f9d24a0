use crate::runner::{InvocationArgs, RunError, Runner};

/// Execute the `run` subcommand in the current directory.
///
/// Returns the exit status for git. Fatal errors (unreadable config, broken
/// stdin) are reported on stderr and map to 1.
pub fn run(args: &InvocationArgs) -> i32 {
    match run_in_current_dir(args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            1
        }
    }
}

fn run_in_current_dir(args: &InvocationArgs) -> Result<i32, RunError> {
    let cwd = std::env::current_dir().map_err(RunError::CurrentDir)?;
    tracing::debug!(hook = %args.hook_name, cwd = %cwd.display(), "running hook");
    Runner::new(cwd).run(args)
}
