pub mod run;

use clap::Subcommand;

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the command configured for a git hook (called from .git/hooks)
    Run {
        /// Hook name as git knows it, e.g. pre-commit
        hook_name: String,
        /// Arguments git passed to the hook, forwarded as HUSKY_GIT_PARAMS
        #[arg(allow_hyphen_values = true)]
        git_params: Option<String>,
        /// Further hook arguments; accepted and ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        rest: Vec<String>,
    },
}
