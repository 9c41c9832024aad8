mod check;

use anyhow::Result;
use clap::Subcommand;

use crate::args::Args;
use crate::exit::Exit;

pub trait Command {
    fn execute(&self, args: &Args) -> Result<Exit>;
}

#[derive(Debug, Subcommand)]
pub enum TagcheckCommand {
    /// Check one file for unbalanced or mismatched tags
    Check(self::check::Check),
}

impl Command for TagcheckCommand {
    fn execute(&self, args: &Args) -> Result<Exit> {
        match self {
            TagcheckCommand::Check(check) => check.execute(args),
        }
    }
}
