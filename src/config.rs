use crate::foodgrab::PlayerNum;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration, one section per player plus a global section.
/// Every key has a default, so a missing section or an empty file still
/// yields a playable game (two greedy bots on a 10x10 board).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub player0: PlayerConfig,
    #[serde(default)]
    pub player1: PlayerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// The game ends once the combined score reaches this.
    pub rounds: u32,
    pub board_size: usize,
    pub logfile: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            rounds: 100,
            board_size: 10,
            logfile: PathBuf::from("game.log"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// `greedy_bot`, `random_bot`, or a remote model identifier.
    pub model: String,
    /// Chat-completion endpoint; required when `model` names a remote model.
    pub base_url: Option<String>,
    pub api_key: String,
    pub request_timeout_secs: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            model: crate::provider::GREEDY_BOT.to_string(),
            base_url: None,
            api_key: "DUMMY_KEY".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn player(&self, num: PlayerNum) -> &PlayerConfig {
        match num {
            PlayerNum::P0 => &self.player0,
            PlayerNum::P1 => &self.player1,
        }
    }
}

/// Load the config file, or fall back to all defaults when it is absent.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config at {}", path.display()))
        }
    };
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.global.rounds, 100);
        assert_eq!(config.global.board_size, 10);
        assert_eq!(config.global.logfile, PathBuf::from("game.log"));
        assert_eq!(config.player0.model, "greedy_bot");
        assert_eq!(config.player1.api_key, "DUMMY_KEY");
        assert_eq!(config.player1.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.global.rounds, 100);
        assert_eq!(config.player0.model, "greedy_bot");
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [global]
            rounds = 5
            board_size = 12
            logfile = "logs/match.log"

            [player0]
            model = "random_bot"

            [player1]
            model = "qwen3"
            base_url = "http://localhost:8000/v1/chat/completions"
            api_key = "secret"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.global.rounds, 5);
        assert_eq!(config.global.board_size, 12);
        assert_eq!(config.player(PlayerNum::P0).model, "random_bot");
        let remote = config.player(PlayerNum::P1);
        assert_eq!(remote.model, "qwen3");
        assert_eq!(
            remote.base_url.as_deref(),
            Some("http://localhost:8000/v1/chat/completions")
        );
        assert_eq!(remote.api_key, "secret");
        assert_eq!(remote.request_timeout_secs, 5);
    }
}
