//! Plain-text high-score persistence.
//!
//! The file holds a single non-negative integer and nothing else, matching
//! the format the game has always used. A missing file means "no prior
//! score"; only unreadable or malformed contents are errors, and the caller
//! decides whether those are fatal.

use std::{fs, io, path::PathBuf};

use thiserror::Error;

/// Errors surfaced by the high-score store.
#[derive(Debug, Error)]
pub(crate) enum ScoreStoreError {
    /// The file exists but could not be read.
    #[error("could not read high-score file {path}: {source}")]
    Unreadable {
        /// Location of the offending file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file contents are not a single non-negative integer.
    #[error("high-score file {path} does not contain a score: {contents:?}")]
    Malformed {
        /// Location of the offending file.
        path: PathBuf,
        /// Contents that failed to parse, truncated for display.
        contents: String,
    },
    /// The score could not be written back.
    #[error("could not write high-score file {path}: {source}")]
    Unwritable {
        /// Location of the offending file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

const DISPLAY_CONTENTS_LIMIT: usize = 32;

/// Loads and saves the single persisted high-score value.
#[derive(Clone, Debug)]
pub(crate) struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the persisted high score. A missing file yields 0.
    pub(crate) fn load(&self) -> Result<u32, ScoreStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(error) => {
                return Err(ScoreStoreError::Unreadable {
                    path: self.path.clone(),
                    source: error,
                })
            }
        };

        contents
            .trim()
            .parse::<u32>()
            .map_err(|_| ScoreStoreError::Malformed {
                path: self.path.clone(),
                contents: contents.chars().take(DISPLAY_CONTENTS_LIMIT).collect(),
            })
    }

    /// Overwrites the persisted high score with the provided value.
    pub(crate) fn save(&self, value: u32) -> Result<(), ScoreStoreError> {
        fs::write(&self.path, value.to_string()).map_err(|error| ScoreStoreError::Unwritable {
            path: self.path.clone(),
            source: error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, process};

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("retro-snake-{}-{name}", process::id()))
    }

    #[test]
    fn missing_file_means_no_prior_score() {
        let store = ScoreStore::new(scratch_path("absent.txt"));
        assert_eq!(store.load().expect("missing file is not an error"), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_path("round-trip.txt");
        let store = ScoreStore::new(path.clone());

        store.save(17).expect("save succeeds");
        assert_eq!(store.load().expect("load succeeds"), 17);
        assert_eq!(fs::read_to_string(&path).expect("file readable"), "17");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_overwrites_prior_contents() {
        let path = scratch_path("overwrite.txt");
        let store = ScoreStore::new(path.clone());

        store.save(3).expect("first save succeeds");
        store.save(42).expect("second save succeeds");
        assert_eq!(store.load().expect("load succeeds"), 42);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let path = scratch_path("whitespace.txt");
        fs::write(&path, " 9\n").expect("fixture written");

        let store = ScoreStore::new(path.clone());
        assert_eq!(store.load().expect("load succeeds"), 9);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn garbage_contents_are_reported() {
        let path = scratch_path("garbage.txt");
        fs::write(&path, "not a score").expect("fixture written");

        let store = ScoreStore::new(path.clone());
        assert!(matches!(
            store.load(),
            Err(ScoreStoreError::Malformed { .. })
        ));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn negative_scores_are_rejected() {
        let path = scratch_path("negative.txt");
        fs::write(&path, "-4").expect("fixture written");

        let store = ScoreStore::new(path.clone());
        assert!(matches!(
            store.load(),
            Err(ScoreStoreError::Malformed { .. })
        ));

        let _ = fs::remove_file(path);
    }
}
