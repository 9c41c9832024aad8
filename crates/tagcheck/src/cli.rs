use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::commands::Command;
use crate::commands::TagcheckCommand;
use crate::exit::Exit;
use crate::logging;

/// The main CLI structure that defines the command-line interface
#[derive(Parser)]
#[command(name = "tagcheck")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: TagcheckCommand,

    #[command(flatten)]
    pub args: Args,
}

/// Parse CLI arguments and execute the chosen command
pub fn run(args: Vec<String>) -> Result<Exit> {
    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
        e.exit();
    });

    logging::init_tracing(&cli.args.global);

    cli.command.execute(&cli.args)
}
