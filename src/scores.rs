use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ScoreError, ScoreResult};

const SCORE_FILE_NAME: &str = "high_score.txt";

/// The persisted high score: a text file holding one decimal integer.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        // Store next to the executable
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                return dir.join(SCORE_FILE_NAME);
            }
        }
        PathBuf::from(SCORE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score. A missing or blank file is a score of zero.
    pub fn load(&self) -> ScoreResult<u32> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                return Ok(0);
            }
            Err(source) => {
                return Err(ScoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed.parse::<u32>().map_err(|_| ScoreError::Parse {
            path: self.path.clone(),
            content: trimmed.chars().take(32).collect(),
        })
    }

    /// Startup read: any failure is logged and treated as zero.
    pub fn load_high_score(&self) -> u32 {
        match self.load() {
            Ok(score) => {
                info!(high_score = score, path = %self.path.display(), "high score loaded");
                score
            }
            Err(e) => {
                warn!("{e}; starting from 0");
                0
            }
        }
    }

    /// Overwrite the file with `high_score`.
    pub fn save(&self, high_score: u32) -> ScoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| ScoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        fs::write(&self.path, high_score.to_string()).map_err(|source| ScoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(high_score, path = %self.path.display(), "high score saved");
        Ok(())
    }
}
