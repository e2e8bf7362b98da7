//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Settings the `quest` binary needs to assemble a runtime.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Fixed seed for enemy decisions; random when absent.
    pub seed: Option<u64>,
    /// Explicit save file location.
    pub save_path: Option<PathBuf>,
    pub log_window: Option<usize>,
    pub session_id: Option<String>,
    /// Directory holding `roster.ron`, `script.ron` and `config.toml` overrides.
    pub content_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `QUEST_SEED` - Seed for enemy decisions (default: random)
    /// - `QUEST_SAVE_PATH` - Save file (default: `<data dir>/<session>.json`)
    /// - `QUEST_LOG_WINDOW` - Battle log lines shown (default: 4)
    /// - `QUEST_SESSION_ID` - Session name for save and log files (default: `default`)
    /// - `QUEST_CONTENT_DIR` - Content override directory (default: built-in data)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("QUEST_SEED"),
            save_path: env::var("QUEST_SAVE_PATH").ok().map(PathBuf::from),
            log_window: read_env::<usize>("QUEST_LOG_WINDOW"),
            session_id: env::var("QUEST_SESSION_ID").ok().filter(|id| !id.is_empty()),
            content_dir: env::var("QUEST_CONTENT_DIR").ok().map(PathBuf::from),
        }
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(DEFAULT_SESSION)
    }

    /// Save file location, falling back to the platform data directory.
    pub fn resolved_save_path(&self) -> PathBuf {
        self.save_path
            .clone()
            .unwrap_or_else(|| data_dir().join(format!("{}.json", self.session_id())))
    }

    /// Applies the log window override on top of the loaded game config.
    pub fn game_config(&self, loaded: GameConfig) -> GameConfig {
        match self.log_window {
            Some(window) => GameConfig::with_log_window(window),
            None => loaded,
        }
    }
}

const DEFAULT_SESSION: &str = "default";

/// Platform data directory for save files.
///
/// - Linux: `~/.local/share/quest` (or `$XDG_DATA_HOME/quest`)
/// - macOS: `~/Library/Application Support/quest`
/// - Windows: `%APPDATA%\quest`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "quest")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory for log files.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "quest")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/quest"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_save_path_wins() {
        let config = CliConfig {
            save_path: Some(PathBuf::from("/tmp/slot.json")),
            ..CliConfig::default()
        };
        assert_eq!(config.resolved_save_path(), PathBuf::from("/tmp/slot.json"));
    }

    #[test]
    fn save_file_is_named_after_the_session() {
        let config = CliConfig {
            session_id: Some("night".into()),
            ..CliConfig::default()
        };
        assert!(config.resolved_save_path().ends_with("night.json"));
        assert!(CliConfig::default().resolved_save_path().ends_with("default.json"));
    }

    #[test]
    fn log_window_override_is_clamped() {
        let config = CliConfig {
            log_window: Some(0),
            ..CliConfig::default()
        };
        assert_eq!(config.game_config(GameConfig::new()).log_window, 1);
        assert_eq!(CliConfig::default().game_config(GameConfig::new()).log_window, 4);
    }
}
