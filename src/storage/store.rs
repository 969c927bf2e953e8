use log::{info, warn};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::Leaderboard;
use crate::errors::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Single-file JSON store holding the whole leaderboard.
///
/// Every operation reads the file from disk; nothing is cached between calls.
/// Load/modify/save cycles are serialized by an in-process lock, so writers in
/// one process never lose updates. Writes go to a sibling `.tmp` file that is
/// then renamed over the store, so readers never see a half-written array.
/// Separate processes sharing the file are not coordinated.
pub struct LeaderboardStore {
    path: PathBuf,
    temp_path: PathBuf,
    lock: Mutex<()>,
}

impl LeaderboardStore {
    /// Open the store, creating an empty leaderboard file if none exists
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut temp_path = OsString::from(path.as_os_str());
        temp_path.push(".tmp");

        let store = Self {
            path,
            temp_path: PathBuf::from(temp_path),
            lock: Mutex::new(()),
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    pub fn load(&self) -> StoreResult<Leaderboard> {
        let _guard = self.acquire();
        self.read_board()
    }

    /// Run one read-modify-write cycle under the lock. Nothing is written
    /// when `mutate` fails.
    pub fn update<F, E>(&self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Leaderboard) -> Result<(), E>,
        StoreError: From<E>,
    {
        let _guard = self.acquire();
        let mut board = self.read_board()?;
        mutate(&mut board)?;
        self.write_board(&board)
    }

    pub fn reset(&self) -> StoreResult<()> {
        let _guard = self.acquire();
        self.write_empty()?;
        info!("Leaderboard reset: {}", self.path.display());
        Ok(())
    }

    // --- Helper Methods ---

    fn initialize(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(parent, source))?;
        }
        self.write_empty()?;
        info!("Created empty leaderboard: {}", self.path.display());
        Ok(())
    }

    /// The lock guards no data, only the file, so a panic in another holder
    /// leaves nothing inconsistent behind.
    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering leaderboard lock after a panicked update");
            PoisonError::into_inner(poisoned)
        })
    }

    fn read_board(&self) -> StoreResult<Leaderboard> {
        let json = fs::read_to_string(&self.path)
            .map_err(|source| self.io_error(&self.path, source))?;
        serde_json::from_str(&json).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_board(&self, board: &Leaderboard) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(board)?;
        self.write_raw(&json)
    }

    fn write_empty(&self) -> StoreResult<()> {
        self.write_raw("[]")
    }

    fn write_raw(&self, contents: &str) -> StoreResult<()> {
        fs::write(&self.temp_path, contents)
            .map_err(|source| self.io_error(&self.temp_path, source))?;
        fs::rename(&self.temp_path, &self.path)
            .map_err(|source| self.io_error(&self.path, source))
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
