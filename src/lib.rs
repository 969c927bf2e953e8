pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;

use anyhow::Result;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::services::standings::StandingsService;

/// Execute one CLI command against the configured leaderboard file
pub fn run(command: Command) -> Result<()> {
    let config = AppConfig::new();
    match command {
        Command::Serve { port } => serve(config.with_port(port)),
        Command::Top => StandingsService::new(config)?.print_top(),
        Command::Reset => StandingsService::new(config)?.reset(),
    }
}

fn serve(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ServerService::new(config).run())
}
