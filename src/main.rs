use std::process::ExitCode;

use clap::Parser;
use log::error;

use leaderboard_service::cli::Cli;

fn main() -> ExitCode {
    sensible_env_logger::init!();

    let cli = Cli::parse();
    match leaderboard_service::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
