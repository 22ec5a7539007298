use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;
use crate::core::{Cell, GenerateOptions, GoalPolicy, DEFAULT_DIMENSION};

pub const CONFIG_ENV_VAR: &str = "MAZE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings. Every field is optional in the config file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed for the first maze; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub goal_policy: GoalPolicy,
    pub fog_of_war: bool,
    /// On the first visit to a junction, only the step towards the goal is
    /// allowed next.
    pub junction_gates: bool,
    pub playback_interval_ms: u64,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            seed: None,
            goal_policy: GoalPolicy::OppositeCorner,
            fog_of_war: false,
            junction_gates: true,
            playback_interval_ms: 200,
            log_file: PathBuf::from("exports/maze.log"),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        GameConfig::from_json(&json)
    }

    /// Reads the file named by `path`, or by `MAZE_CONFIG` when `path` is
    /// `None`. Defaults are used when neither names a file.
    pub fn load_or_default(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        GameConfig::load_first(path, env_path.as_deref())
    }

    fn load_first(path: Option<&Path>, fallback: Option<&Path>) -> Result<GameConfig, ConfigError> {
        match path.or(fallback) {
            Some(path) => GameConfig::load(path),
            None => Ok(GameConfig::default()),
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            start: Cell::new(0, 0),
            goal_policy: self.goal_policy,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.width, 21);
        assert_eq!(config.height, 21);
    }

    #[test]
    fn config_fields_override_defaults() {
        let config = GameConfig::from_json(r#"{
            "width": 11,
            "seed": 42,
            "goal_policy": "farthest",
            "fog_of_war": true
        }"#).unwrap();

        assert_eq!(config.width, 11);
        assert_eq!(config.height, 21);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.goal_policy, GoalPolicy::Farthest);
        assert!(config.fog_of_war);
        assert_eq!(config.generate_options().goal_policy, GoalPolicy::Farthest);
    }

    fn write_temp_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("maze_engine_{}_{}.json", name, std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn no_config_file_uses_defaults() {
        assert_eq!(GameConfig::load_first(None, None).unwrap(), GameConfig::default());
    }

    #[test]
    fn explicit_path_wins_over_fallback() {
        let explicit = write_temp_config("explicit", r#"{"width": 9}"#);
        let fallback = write_temp_config("fallback", r#"{"width": 15}"#);

        let config = GameConfig::load_first(Some(explicit.as_path()), Some(fallback.as_path())).unwrap();
        assert_eq!(config.width, 9);

        let config = GameConfig::load_first(None, Some(fallback.as_path())).unwrap();
        assert_eq!(config.width, 15);

        std::fs::remove_file(explicit).unwrap();
        std::fs::remove_file(fallback).unwrap();
    }

    #[test]
    fn explicit_path_is_read_by_load_or_default() {
        let path = write_temp_config("load_or_default", r#"{"height": 7, "junction_gates": false}"#);

        let config = GameConfig::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(config.height, 7);
        assert!(!config.junction_gates);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let path = std::env::temp_dir().join("maze_engine_does_not_exist.json");
        let result = GameConfig::load_first(Some(path.as_path()), None);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn bad_json_is_an_error() {
        let result = GameConfig::from_json(r#"{"width": "wide"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
