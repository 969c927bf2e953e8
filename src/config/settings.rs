use std::path::PathBuf;

const STORE_PATH_VAR: &str = "LEADERBOARD_PATH";
const DEFAULT_STORE_PATH: &str = "leaderboard.json";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3001 }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        let path = std::env::var(STORE_PATH_VAR)
            .unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
        Self { path: PathBuf::from(path) }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardSettings {
    /// Maximum number of players returned by a listing
    pub top_limit: usize,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self { top_limit: 10 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub leaderboard: LeaderboardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            storage: StorageSettings::default(),
            leaderboard: LeaderboardSettings::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    pub fn with_store_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage.path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.leaderboard.top_limit, 10);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::new()
            .with_port(9000)
            .with_store_path("/tmp/scores.json");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/scores.json"));
    }
}
