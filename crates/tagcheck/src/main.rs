mod args;
mod cli;
mod commands;
mod exit;
mod logging;
mod render;
mod report;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match cli::run(args) {
        Ok(exit) => exit.into_exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("Caused by: {cause}");
            }
            ExitCode::from(2)
        }
    }
}
