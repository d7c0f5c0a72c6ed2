use super::documents::{GameDocument, TeamsDocument};
use super::error::SaveError;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const GAME_FILE: &str = "football_game_data.json";
pub const TEAMS_FILE: &str = "football_teams_data.json";

/// Reads and writes the two game documents under one data directory.
///
/// Writes are atomic: serialize to a temp file, flush, fsync, rename.
/// A failed read never touches in-memory state; the convenience loaders
/// log the failure and yield "no data".
#[derive(Debug, Clone)]
pub struct SaveManager {
    data_dir: PathBuf,
}

impl SaveManager {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn game_path(&self) -> PathBuf {
        self.data_dir.join(GAME_FILE)
    }

    pub fn teams_path(&self) -> PathBuf {
        self.data_dir.join(TEAMS_FILE)
    }

    pub fn save_game(&self, document: &GameDocument) -> Result<(), SaveError> {
        save_to_path(&self.game_path(), document)?;
        log::info!("Game data saved");
        Ok(())
    }

    pub fn save_teams(&self, document: &TeamsDocument) -> Result<(), SaveError> {
        save_to_path(&self.teams_path(), document)?;
        log::info!("Teams data saved");
        Ok(())
    }

    /// Load the game document, or `None` when it is missing or
    /// unreadable.
    pub fn load_game(&self) -> Option<GameDocument> {
        load_optional(&self.game_path())
    }

    /// Load the teams document, or `None` when it is missing or
    /// unreadable.
    pub fn load_teams(&self) -> Option<TeamsDocument> {
        load_optional(&self.teams_path())
    }

    /// Strict variant for callers that need the failure reason.
    pub fn try_load_game(&self) -> Result<GameDocument, SaveError> {
        load_from_path(&self.game_path())
    }

    /// Strict variant for callers that need the failure reason.
    pub fn try_load_teams(&self) -> Result<TeamsDocument, SaveError> {
        load_from_path(&self.teams_path())
    }

    /// Overwrite the game document with an empty game.
    pub fn reset_game_data(&self) -> Result<(), SaveError> {
        save_to_path(&self.game_path(), &GameDocument::empty())?;
        log::info!("Game data reset");
        Ok(())
    }
}

fn load_optional<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match load_from_path(path) {
        Ok(document) => Some(document),
        Err(err) => {
            if err.is_recoverable() {
                log::warn!("No data loaded from {:?}: {}", path, err);
            } else {
                log::error!("Failed to read {:?}: {}", path, err);
            }
            None
        }
    }
}

fn save_to_path<T: Serialize>(path: &Path, value: &T) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_vec_pretty(value)?;

    // Atomic save: write to temp file, then rename
    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&data)?;
        file.flush()?;

        // sync_all ensures data is written to disk (portable fsync)
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, SaveError> {
    if !path.exists() {
        return Err(SaveError::FileNotFound { path: path.display().to_string() });
    }

    let mut file = File::open(path)?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;

    let document = serde_json::from_str(&data)?;
    log::debug!("Loaded {} bytes from {:?}", data.len(), path);
    Ok(document)
}
