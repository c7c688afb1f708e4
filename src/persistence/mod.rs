//! Score file persistence
//!
//! The score file is a two-field JSON record (`name`, `score`). Reads fall
//! back to a default record when the file is missing or malformed instead of
//! failing the game; writes go through a temp file in the same directory and
//! rename over the target, last writer wins.

use std::fs;
use std::io;
use std::path::Path;

use crate::highscores::HighScoreRecord;

/// Why the score file could not be used
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("score file unavailable: {0}")]
    Unavailable(#[from] io::Error),
    #[error("score file malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read the high score record from `path`
pub fn load(path: &Path) -> Result<HighScoreRecord, PersistenceError> {
    let json = fs::read_to_string(path)?;
    let record = serde_json::from_str(&json)?;
    Ok(record)
}

/// Read the high score record, treating a missing or corrupt file as an
/// empty record rather than a fatal condition
pub fn load_or_default(path: &Path) -> HighScoreRecord {
    match load(path) {
        Ok(record) => record,
        Err(PersistenceError::Unavailable(e)) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("no score file at {}, starting fresh", path.display());
            HighScoreRecord::default()
        }
        Err(e) => {
            log::warn!("score file unusable ({}), starting fresh", e);
            HighScoreRecord::default()
        }
    }
}

/// Overwrite the score file with `record` (no merge, no backup)
pub fn store(path: &Path, record: &HighScoreRecord) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(record)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    log::info!(
        "high score saved: {} -> {} ({})",
        path.display(),
        record.score,
        record.name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("bubble_arena_{}_{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_store_then_load_round_trip() {
        let path = scratch_path("round_trip");
        let record = HighScoreRecord::new("pat", 420);
        store(&path, &record).unwrap();
        assert_eq!(load(&path).unwrap(), record);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_yields_default() {
        let path = scratch_path("missing");
        let _ = fs::remove_file(&path);
        assert_eq!(load_or_default(&path), HighScoreRecord::default());
        assert!(matches!(
            load(&path),
            Err(PersistenceError::Unavailable(_))
        ));
    }

    #[test]
    fn test_corrupt_file_yields_default() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(load(&path), Err(PersistenceError::Malformed(_))));
        assert_eq!(load_or_default(&path), HighScoreRecord::default());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_store_overwrites_unconditionally() {
        let path = scratch_path("overwrite");
        store(&path, &HighScoreRecord::new("first", 900)).unwrap();
        store(&path, &HighScoreRecord::new("second", 10)).unwrap();
        // Last writer wins; improvement policy lives with the caller
        assert_eq!(load(&path).unwrap(), HighScoreRecord::new("second", 10));
        fs::remove_file(&path).unwrap();
    }
}
