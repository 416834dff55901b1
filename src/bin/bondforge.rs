use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

mod commands;

use commands::{bridge, info};

#[derive(Parser, Debug)]
#[command(
    name = "bondforge",
    about = "A command-line tool that rewrites covalent protein-protein bonds in structure-prediction job documents as explicit single-residue ligand bridges.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Enable debug-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite protein-protein bonds for every JSON document in a directory.
    Bridge(bridge::BridgeArgs),
    /// Inspect a document's chains and bonds without modifying it.
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Command::Bridge(args) => bridge::run(&args),
        Command::Info(args) => info::run(&args),
    }
}
