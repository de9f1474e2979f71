//! Locating, reading and overriding config.toml.

use crate::CentralConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CONNECT4_CONFIG";

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from subdirectory)
];

/// Errors from loading a config file explicitly.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by CONNECT4_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_ENV_VAR, path.display());
            return load_from_path(&path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_ENV_VAR,
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Nothing on disk
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path, falling back to defaults on error.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match try_load_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using defaults", e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Load configuration from a specific path, reporting read and parse errors.
pub fn try_load_from_path(path: &Path) -> Result<CentralConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(apply_env_overrides(config))
}

/// Copy `CONNECT4_*` variables onto config fields.
///
/// Values that fail to parse are ignored and the field keeps its value.
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Any FromStr field
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
    // Option<T> where T: FromStr
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = Some(v);
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: CONNECT4_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "CONNECT4_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "CONNECT4_COMMON_SEED", optional_parse);

    // Board
    env_override!(config, board.columns, "CONNECT4_BOARD_COLUMNS", parse);
    env_override!(config, board.rows, "CONNECT4_BOARD_ROWS", parse);

    // Rollout
    env_override!(config, rollout.walks, "CONNECT4_ROLLOUT_WALKS", parse);

    // MCTS
    env_override!(config, mcts.walks, "CONNECT4_MCTS_WALKS", parse);
    env_override!(
        config,
        mcts.exploration,
        "CONNECT4_MCTS_EXPLORATION",
        parse
    );

    // Arena
    env_override!(config, arena.red, "CONNECT4_ARENA_RED");
    env_override!(config, arena.yellow, "CONNECT4_ARENA_YELLOW");
    env_override!(config, arena.games, "CONNECT4_ARENA_GAMES", parse);

    config
}
