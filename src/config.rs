//! Configuration: words per game, single-letter probability, progress path
//!
//! Read from `config.toml` in the config directory. Every key is optional and
//! checked on its own: a missing, mistyped or out-of-range value falls back to
//! its default without touching the others. Unknown keys are ignored.

use serde::Serialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDS_PER_GAME: u32 = 10;
pub const DEFAULT_SINGLE_LETTER_PROBABILITY: f64 = 0.3;
/// Upper bound on words in one session
pub const MAX_WORDS_PER_GAME: u32 = 1000;

const APP_DIR: &str = "borse";
const CONFIG_FILE: &str = "config.toml";
const PROGRESS_FILE: &str = "progress.json";

/// `$XDG_CONFIG_HOME/borse`, else `~/.config/borse`, else `./.borse`
pub fn default_config_dir() -> PathBuf {
    if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    match env::var_os("HOME").filter(|v| !v.is_empty()) {
        Some(home) => PathBuf::from(home).join(".config").join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

/// `config.toml` inside [`default_config_dir`]
pub fn default_config_path() -> PathBuf {
    default_config_dir().join(CONFIG_FILE)
}

/// `progress.json` inside [`default_config_dir`]
pub fn default_progress_path() -> PathBuf {
    default_config_dir().join(PROGRESS_FILE)
}

/// Settings snapshot, fixed for the life of the process
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Config {
    pub progress_file: PathBuf,
    /// Always within 1..=MAX_WORDS_PER_GAME
    pub words_per_game: u32,
    /// Always within [0, 1]
    pub single_letter_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            progress_file: default_progress_path(),
            words_per_game: DEFAULT_WORDS_PER_GAME,
            single_letter_probability: DEFAULT_SINGLE_LETTER_PROBABILITY,
        }
    }
}

impl Config {
    /// Build from a parsed TOML table, per-key fallback to defaults
    pub fn from_table(table: &toml::Table) -> Self {
        let defaults = Config::default();

        let progress_file = match table.get("progress_file") {
            None => defaults.progress_file,
            Some(value) => match value.as_str().filter(|s| !s.trim().is_empty()) {
                Some(path) => PathBuf::from(path),
                None => {
                    tracing::warn!(?value, "invalid progress_file, using default");
                    defaults.progress_file
                }
            },
        };

        let words_per_game = match table.get("words_per_game") {
            None => defaults.words_per_game,
            Some(value) => match value
                .as_integer()
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| (1..=MAX_WORDS_PER_GAME).contains(n))
            {
                Some(n) => n,
                None => {
                    tracing::warn!(?value, "invalid words_per_game, using default");
                    defaults.words_per_game
                }
            },
        };

        // `0` and `1` are valid TOML integers for a probability
        let single_letter_probability = match table.get("single_letter_probability") {
            None => defaults.single_letter_probability,
            Some(value) => match value
                .as_float()
                .or_else(|| value.as_integer().map(|n| n as f64))
                .filter(|p| (0.0..=1.0).contains(p))
            {
                Some(p) => p,
                None => {
                    tracing::warn!(?value, "invalid single_letter_probability, using default");
                    defaults.single_letter_probability
                }
            },
        };

        Config {
            progress_file,
            words_per_game,
            single_letter_probability,
        }
    }

    /// Load from a file; unreadable or unparsable files give all defaults
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                }
                return Config::default();
            }
        };

        match content.parse::<toml::Table>() {
            Ok(table) => {
                let config = Config::from_table(&table);
                tracing::info!(path = %path.display(), ?config, "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config TOML, using defaults");
                Config::default()
            }
        }
    }

    /// Write as TOML, creating the directory if needed
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> toml::Table {
        text.parse().unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.words_per_game, 10);
        assert_eq!(config.single_letter_probability, 0.3);
        assert!(config.progress_file.ends_with("progress.json"));
        assert!(default_config_path().ends_with("config.toml"));
    }

    #[test]
    fn test_from_table_reads_all_keys() {
        let config = Config::from_table(&table(
            r#"
            progress_file = "/custom/path.json"
            words_per_game = 15
            single_letter_probability = 0.7
            colour = "blue"
            "#,
        ));
        assert_eq!(config.progress_file, PathBuf::from("/custom/path.json"));
        assert_eq!(config.words_per_game, 15);
        assert_eq!(config.single_letter_probability, 0.7);
    }

    #[test]
    fn test_from_table_missing_keys_use_defaults() {
        assert_eq!(Config::from_table(&toml::Table::new()), Config::default());
    }

    #[test]
    fn test_bad_values_fall_back_per_key() {
        let config = Config::from_table(&table(
            r#"
            progress_file = 42
            words_per_game = 0
            single_letter_probability = 1.5
            "#,
        ));
        assert_eq!(config, Config::default());

        let config = Config::from_table(&table(
            r#"
            words_per_game = "twenty"
            single_letter_probability = 0
            "#,
        ));
        assert_eq!(config.words_per_game, DEFAULT_WORDS_PER_GAME);
        assert_eq!(config.single_letter_probability, 0.0);
    }

    #[test]
    fn test_words_per_game_above_cap_falls_back() {
        let config = Config::from_table(&table("words_per_game = 4000000000"));
        assert_eq!(config.words_per_game, DEFAULT_WORDS_PER_GAME);

        let config = Config::from_table(&table("words_per_game = 1000"));
        assert_eq!(config.words_per_game, MAX_WORDS_PER_GAME);
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "words_per_game = 5\nsingle_letter_probability = 0.0\n").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.words_per_game, 5);
        assert_eq!(config.single_letter_probability, 0.0);
    }

    #[test]
    fn test_load_missing_and_invalid_files() {
        assert_eq!(
            Config::load(Path::new("/nonexistent/config.toml")),
            Config::default()
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = valid = toml").unwrap();
        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let original = Config {
            progress_file: PathBuf::from("/test/path.json"),
            words_per_game: 25,
            single_letter_probability: 0.5,
        };
        original.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("words_per_game = 25"));
        assert_eq!(Config::load(&path), original);
    }
}
