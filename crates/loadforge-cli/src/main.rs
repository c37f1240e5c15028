use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one annealing search over a jobs file.
    Solve(cmd::solve::SolveArgs),
    /// Run parallel multi-restart rounds until the best stops improving.
    Swarm(cmd::swarm::SwarmArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Solve(args) => cmd::solve::run(args),
        Commands::Swarm(args) => cmd::swarm::run(args),
    };

    // The optimizer core never terminates the process; exit policy lives here.
    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}
