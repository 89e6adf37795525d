//! datajpa CLI - Member/Team repositories from the command line
//!
//! Usage:
//!   datajpa demo                                  - Run the repository scenarios
//!   datajpa members --username memberA --shape optional
//!   datajpa dto                                   - Members joined with team names
//!   datajpa named Member.findMember -p username=memberA -p age=10
//!
//! Every command except `demo` runs against repositories seeded from
//! `--fixture <file.json|file.yaml>` (empty when omitted).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{load_repositories, DemoCommand, DtoCommand, MembersCommand, NamedCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "datajpa")]
#[command(about = "datajpa - typed member repositories with result-shape adaptation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed repositories from a JSON or YAML fixture
    #[arg(short, long, global = true)]
    fixture: Option<PathBuf>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the repository scenarios against fresh repositories
    Demo(DemoCommand),
    /// Query members and adapt the rows to a return shape
    Members(MembersCommand),
    /// Print members joined with their team names
    Dto(DtoCommand),
    /// Run a named query
    Named(NamedCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo(cmd) => cmd.run(),
        Commands::Members(cmd) => cmd.run(&load_repositories(cli.fixture.as_deref())?),
        Commands::Dto(cmd) => cmd.run(&load_repositories(cli.fixture.as_deref())?),
        Commands::Named(cmd) => cmd.run(&load_repositories(cli.fixture.as_deref())?),
    }
}
