use anyhow::{Context, Result};
use log::info;
use std::fmt::Write as _;

use crate::config::settings::AppConfig;
use crate::domain::PlayerRecord;
use crate::storage::LeaderboardStore;

/// Offline access to the leaderboard file from the command line
pub struct StandingsService {
    config: AppConfig,
    store: LeaderboardStore,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = LeaderboardStore::open(&config.storage.path)
            .context("Failed to initialize leaderboard store")?;
        Ok(Self { config, store })
    }

    pub fn top(&self) -> Result<Vec<PlayerRecord>> {
        let board = self.store.load().context("Failed to read leaderboard")?;
        Ok(board.top(self.config.leaderboard.top_limit))
    }

    pub fn print_top(&self) -> Result<()> {
        let players = self.top()?;
        print!("{}", render_table(&players));
        Ok(())
    }

    pub fn reset(&self) -> Result<()> {
        self.store.reset().context("Failed to reset leaderboard")?;
        info!("Cleared {}", self.store.path().display());
        Ok(())
    }
}

pub fn render_table(players: &[PlayerRecord]) -> String {
    if players.is_empty() {
        return "No games recorded yet\n".to_string();
    }

    let name_width = players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<name_width$}  {:>5}  {:>4}  {:>6}  {:>5}",
        "#", "Player", "Games", "Wins", "Losses", "Draws"
    );
    for (i, p) in players.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<name_width$}  {:>5}  {:>4}  {:>6}  {:>5}",
            i + 1, p.name, p.games, p.wins, p.losses, p.draws
        );
    }
    out
}
