use crate::config::settings::AppConfig;
use crate::storage::LeaderboardStore;

pub mod leaderboard;

pub struct AppState {
    pub store: LeaderboardStore,
    pub config: AppConfig,
}
