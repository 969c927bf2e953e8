use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Outcome of a single game from the submitting player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "win",
            GameResult::Loss => "loss",
            GameResult::Draw => "draw",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game result: {0}")]
pub struct UnknownResult(pub String);

impl FromStr for GameResult {
    type Err = UnknownResult;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(GameResult::Win),
            "loss" => Ok(GameResult::Loss),
            "draw" => Ok(GameResult::Draw),
            other => Err(UnknownResult(other.to_string())),
        }
    }
}

/// A stored counter for this player is already at its maximum
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("game counters for {0} are exhausted")]
pub struct CounterOverflow(pub String);

/// Accumulated statistics for one player, keyed by exact name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PlayerRecord {
    /// A fresh record holding exactly one game
    pub fn first_game(name: &str, result: GameResult) -> Self {
        let mut record = Self {
            name: name.to_string(),
            games: 1,
            wins: 0,
            losses: 0,
            draws: 0,
        };
        *record.outcome_mut(result) = 1;
        record
    }

    /// Counts one more game. On overflow the record is left untouched.
    pub fn apply(&mut self, result: GameResult) -> Result<(), CounterOverflow> {
        let overflow = || CounterOverflow(self.name.clone());
        let games = self.games.checked_add(1).ok_or_else(overflow)?;
        let outcome = self.outcome(result).checked_add(1).ok_or_else(overflow)?;

        self.games = games;
        *self.outcome_mut(result) = outcome;
        Ok(())
    }

    fn outcome(&self, result: GameResult) -> u32 {
        match result {
            GameResult::Win => self.wins,
            GameResult::Loss => self.losses,
            GameResult::Draw => self.draws,
        }
    }

    fn outcome_mut(&mut self, result: GameResult) -> &mut u32 {
        match result {
            GameResult::Win => &mut self.wins,
            GameResult::Loss => &mut self.losses,
            GameResult::Draw => &mut self.draws,
        }
    }
}

/// Wins descending, then fewer games first
pub fn ranking_order(a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
    b.wins.cmp(&a.wins).then_with(|| a.games.cmp(&b.games))
}

/// The full, unordered collection of player records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    players: Vec<PlayerRecord>,
}

impl Leaderboard {
    /// Records a result, creating the player on first sight
    pub fn record(&mut self, name: &str, result: GameResult) -> Result<(), CounterOverflow> {
        match self.players.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.apply(result),
            None => {
                self.players.push(PlayerRecord::first_game(name, result));
                Ok(())
            }
        }
    }

    /// Ranked view, capped at `limit` entries
    pub fn top(&self, limit: usize) -> Vec<PlayerRecord> {
        let mut ranked = self.players.clone();
        ranked.sort_by(ranking_order);
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, wins: u32, games: u32) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            games,
            wins,
            losses: games - wins,
            draws: 0,
        }
    }

    fn is_consistent(p: &PlayerRecord) -> bool {
        p.wins + p.losses + p.draws == p.games
    }

    #[test]
    fn test_parse_game_result() {
        assert_eq!("win".parse::<GameResult>(), Ok(GameResult::Win));
        assert_eq!("loss".parse::<GameResult>(), Ok(GameResult::Loss));
        assert_eq!("draw".parse::<GameResult>(), Ok(GameResult::Draw));
        assert!("Win".parse::<GameResult>().is_err());
        assert!("tie".parse::<GameResult>().is_err());
    }

    #[test]
    fn test_new_player_creation() {
        let mut board = Leaderboard::new();
        board.record("Alice", GameResult::Win).unwrap();

        let alice = board.find("Alice").unwrap();
        assert_eq!(
            alice,
            &PlayerRecord {
                name: "Alice".to_string(),
                games: 1,
                wins: 1,
                losses: 0,
                draws: 0,
            }
        );
    }

    #[test]
    fn test_existing_player_update() {
        let mut board = Leaderboard::new();
        board.record("Alice", GameResult::Win).unwrap();
        board.record("Alice", GameResult::Loss).unwrap();

        assert_eq!(board.len(), 1);
        let alice = board.find("Alice").unwrap();
        assert_eq!(alice.games, 2);
        assert_eq!(alice.wins, 1);
        assert_eq!(alice.losses, 1);
        assert_eq!(alice.draws, 0);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut board = Leaderboard::new();
        board.record("alice", GameResult::Draw).unwrap();
        board.record("Alice", GameResult::Draw).unwrap();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut board = Leaderboard::new();
        let results = [GameResult::Win, GameResult::Draw, GameResult::Loss, GameResult::Win];
        for (i, result) in results.iter().cycle().take(40).enumerate() {
            board.record(&format!("player{}", i % 7), *result).unwrap();
        }
        assert!(board.players().iter().all(is_consistent));
        assert_eq!(board.players().iter().map(|p| p.games).sum::<u32>(), 40);
    }

    #[test]
    fn test_ranking_order() {
        let board = Leaderboard::from_players(vec![
            record("A", 5, 10),
            record("B", 5, 7),
            record("C", 8, 20),
        ]);

        let names: Vec<_> = board.top(10).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_top_is_capped() {
        let mut board = Leaderboard::new();
        for i in 0..15 {
            board.record(&format!("player{i}"), GameResult::Win).unwrap();
        }
        assert_eq!(board.top(10).len(), 10);
        assert_eq!(board.len(), 15);
    }

    #[test]
    fn test_top_does_not_reorder_storage() {
        let board = Leaderboard::from_players(vec![record("A", 1, 1), record("B", 3, 3)]);
        let _ = board.top(10);
        assert_eq!(board.players()[0].name, "A");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut board = Leaderboard::new();
        board.record("Bob", GameResult::Draw).unwrap();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "name": "Bob", "games": 1, "wins": 0, "losses": 0, "draws": 1 }
            ])
        );
    }

    #[test]
    fn test_counter_overflow_leaves_record_untouched() {
        let mut board = Leaderboard::from_players(vec![PlayerRecord {
            name: "Max".to_string(),
            games: u32::MAX,
            wins: u32::MAX,
            losses: 0,
            draws: 0,
        }]);
        let before = board.clone();

        let err = board.record("Max", GameResult::Loss).unwrap_err();

        assert_eq!(err, CounterOverflow("Max".to_string()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_outcome_overflow_does_not_count_game() {
        let mut player = PlayerRecord {
            name: "Dee".to_string(),
            games: 7,
            wins: 0,
            losses: 0,
            draws: u32::MAX,
        };

        assert!(player.apply(GameResult::Draw).is_err());
        assert_eq!(player.games, 7);
        player.apply(GameResult::Win).unwrap();
        assert_eq!(player.games, 8);
    }
}
