//! # Config — Key=Value Run Configuration
//!
//! Loads the `{threads, max, variant}` triple from a plain `key=value` file:
//! one pair per line, `#` starts a comment, unknown keys and malformed lines
//! are ignored. A missing or unreadable file is not an error — the run falls
//! back to defaults (`threads=4 max=1000 variant=1`) with a logged warning.
//!
//! The config is immutable once constructed and owned by the driver for the
//! duration of one run. Degenerate values are normalized at the point of use
//! (`effective_threads` clamps 0 to 1; `max < 2` simply yields an empty
//! search), never rejected.

use std::fs;
use std::path::Path;

use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Worker thread count. 0 is legal and treated as 1.
    pub threads: usize,
    /// Inclusive upper search bound; anything below 2 is an empty search.
    pub max_n: u64,
    /// Strategy selector, 1 through 4. Other values are reported at dispatch.
    pub variant: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threads: 4,
            max_n: 1000,
            variant: 1,
        }
    }
}

impl Config {
    /// Thread count normalized for partitioning (never 0).
    pub fn effective_threads(&self) -> usize {
        self.threads.max(1)
    }

    /// Read a config file, falling back to defaults if it cannot be read.
    pub fn load(path: &Path) -> Config {
        match fs::read_to_string(path) {
            Ok(text) => Config::parse(&text),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read config, using defaults");
                Config::default()
            }
        }
    }

    /// Parse `key=value` text. Each recognized key overrides the default;
    /// a value that fails to parse leaves that key at its default.
    pub fn parse(text: &str) -> Config {
        let mut config = Config::default();
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or("");
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            match key {
                "threads" => match value.parse::<i64>() {
                    Ok(v) => config.threads = v.max(0) as usize,
                    Err(_) => warn!(value, "ignoring unparseable threads value"),
                },
                "max" => match value.parse::<i64>() {
                    // Negative bounds behave like any bound below 2: empty search
                    Ok(v) => config.max_n = v.max(0) as u64,
                    Err(_) => warn!(value, "ignoring unparseable max value"),
                },
                "variant" => match value.parse::<i64>() {
                    Ok(v) => config.variant = v.clamp(0, u32::MAX as i64) as u32,
                    Err(_) => warn!(value, "ignoring unparseable variant value"),
                },
                _ => {}
            }
        }
        config
    }
}
