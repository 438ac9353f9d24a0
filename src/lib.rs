pub mod config;
pub mod domain;
pub mod logging;
pub mod runner;

pub(crate) mod cli;

pub use cli::Commands;

/// Run one hook invocation from the binary and return its exit status.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Library users
/// should drive [`runner::Runner`] directly.
pub fn run_hook(hook_name: String, git_params: Option<String>) -> i32 {
    let args = runner::InvocationArgs::new(hook_name, git_params);
    cli::run::run(&args)
}
