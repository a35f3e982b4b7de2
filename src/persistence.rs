//! Case file persistence
//!
//! The whole [`GameState`] is one JSON record at a single well-known path.
//! Load-on-start: if the record exists, resume from it; otherwise the caller
//! initializes from the content catalog. Save-on-change: every transition is
//! followed by a full overwrite of the record. Reset deletes the record.

use crate::game::GameState;
use crate::{GameError, Result};
use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Well-known name of the save record.
pub const SAVE_FILE_NAME: &str = "midnight-manuscript.save.json";

/// Adapter around the on-disk save record.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Save record in the user's home directory, falling back to the
    /// working directory when no home is set.
    pub fn default_location() -> Self {
        let base = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .unwrap_or_default();
        Self {
            path: base.join(SAVE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved state. `Ok(None)` when no record exists; a record that
    /// no longer parses is a corrupted save, not a fresh game.
    pub fn load(&self) -> Result<Option<GameState>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(GameError::SaveIo {
                    path: self.path.display().to_string(),
                    source: err,
                }
                .into())
            }
        };
        let state = serde_json::from_slice(&bytes)
            .map_err(|err| GameError::CorruptedSave(err.to_string()))?;
        Ok(Some(state))
    }

    /// Overwrite the record with the current state, stamping it.
    pub fn save(&self, state: &mut GameState) -> Result<()> {
        state.last_save = Utc::now();
        let json = serde_json::to_vec_pretty(state)?;
        fs::write(&self.path, json).map_err(|err| GameError::SaveIo {
            path: self.path.display().to_string(),
            source: err,
        })?;
        Ok(())
    }

    /// Delete the record. Deleting a record that does not exist is fine.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(GameError::SaveIo {
                path: self.path.display().to_string(),
                source: err,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EvidenceId, SuspectId};
    use crate::game::case::Case;

    fn save_in(dir: &tempfile::TempDir) -> SaveFile {
        SaveFile::at(dir.path().join(SAVE_FILE_NAME))
    }

    #[test]
    fn missing_record_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_progress() {
        let dir = tempfile::tempdir().unwrap();
        let save = save_in(&dir);

        let case = Case::midnight_manuscript();
        let mut state = GameState::new(&case);
        state.collect_evidence(EvidenceId::Decanter);
        state.complete_research(SuspectId::Victoria);
        save.save(&mut state).unwrap();

        let restored = save.load().unwrap().expect("record should exist");
        assert!(restored.is_collected(EvidenceId::Decanter));
        assert!(restored.is_collected(EvidenceId::FinancialReport));
        assert_eq!(restored.last_save, state.last_save);
    }

    #[test]
    fn corrupted_record_is_an_error_not_a_fresh_game() {
        let dir = tempfile::tempdir().unwrap();
        let save = save_in(&dir);
        fs::write(save.path(), b"{ not json").unwrap();

        let err = save.load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::CorruptedSave(_))
        ));
    }

    #[test]
    fn reset_deletes_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let save = save_in(&dir);

        let case = Case::midnight_manuscript();
        let mut state = GameState::new(&case);
        save.save(&mut state).unwrap();
        assert!(save.load().unwrap().is_some());

        save.reset().unwrap();
        assert!(save.load().unwrap().is_none());

        // Resetting twice is fine.
        save.reset().unwrap();
    }
}
