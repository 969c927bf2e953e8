pub mod models;

pub use models::{GameResult, Leaderboard, PlayerRecord};
