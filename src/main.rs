use clap::Parser;
use githook_runner::Commands;

/// Git hook runner: resolves the configured command for a hook and runs it.
#[derive(Debug, Parser)]
#[command(name = "githook-runner", version, about)]
struct Cli {
    /// Log resolution and spawn details to stderr (also enabled by HUSKY_DEBUG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    githook_runner::logging::init(cli.verbose || githook_runner::logging::debug_requested());

    let status = match cli.command {
        Commands::Run {
            hook_name,
            git_params,
            ..
        } => githook_runner::run_hook(hook_name, git_params),
    };
    std::process::exit(status);
}
