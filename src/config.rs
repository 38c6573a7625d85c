use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;

pub const DEFAULT_NUMBER_OF_WORDS: usize = 20;
pub const DEFAULT_WORD_LIST: &str = "english";
pub const DEFAULT_TICK_RATE_MS: u64 = 100;
/// Shorter waits would busy-poll the terminal.
pub const MIN_TICK_RATE_MS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_number_of_words")]
    pub number_of_words: usize,
    #[serde(default = "default_word_list")]
    pub word_list: String,
    /// how long the loop waits for input before refreshing the live wpm
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_number_of_words() -> usize {
    DEFAULT_NUMBER_OF_WORDS
}
fn default_word_list() -> String {
    DEFAULT_WORD_LIST.to_string()
}
fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_words: default_number_of_words(),
            word_list: default_word_list(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Command line values win over the file.
    pub fn with_overrides(
        mut self,
        number_of_words: Option<usize>,
        word_list: Option<String>,
    ) -> Self {
        if let Some(n) = number_of_words {
            self.number_of_words = n;
        }
        if let Some(list) = word_list {
            self.word_list = list;
        }
        // zero words is never a useful test
        if self.number_of_words == 0 {
            self.number_of_words = DEFAULT_NUMBER_OF_WORDS;
        }
        self.tick_rate_ms = self.tick_rate_ms.max(MIN_TICK_RATE_MS);
        self
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }
}
