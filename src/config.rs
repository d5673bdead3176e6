//! Process-level configuration. Gameplay tuning is compiled in
//! (see [`crate::game::Settings`]); only file locations and the loop cadence
//! can be overridden, through environment variables.

use std::env;
use std::path::PathBuf;

use crate::scores::HighScoreStore;

pub const SCORE_FILE_VAR: &str = "ALIEN_INVASION_SCORE_FILE";
pub const LOG_FILE_VAR: &str = "ALIEN_INVASION_LOG_FILE";
pub const TICK_MS_VAR: &str = "ALIEN_INVASION_TICK_MS";

pub const DEFAULT_TICK_MS: u64 = 16; // ~60 FPS
const LOG_FILE_NAME: &str = "alien_invasion.log";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub score_file: PathBuf,
    pub log_file: PathBuf,
    pub tick_rate_ms: u64,
    /// Values that were rejected and replaced by a default. Logging is not
    /// up yet when the environment is read, so `main` reports these later.
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let score_file = lookup(SCORE_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(HighScoreStore::default_path);
        let log_file = lookup(LOG_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_log_path);
        let mut warnings = Vec::new();
        let tick_rate_ms = read_u64(&lookup, TICK_MS_VAR, DEFAULT_TICK_MS, &mut warnings);

        Self {
            score_file,
            log_file,
            tick_rate_ms,
            warnings,
        }
    }
}

fn default_log_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME)),
        Err(_) => PathBuf::from(LOG_FILE_NAME),
    }
}

fn read_u64<F>(lookup: &F, name: &str, default: u64, warnings: &mut Vec<String>) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(value) if value > 0 => value,
            _ => {
                warnings.push(format!(
                    "{name}={raw:?} is not a positive integer. Falling back to {default}."
                ));
                default
            }
        },
    }
}
