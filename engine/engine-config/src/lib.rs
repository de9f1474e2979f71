//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! by the search agents and the arena driver.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CONNECT4_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CONNECT4_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CONNECT4_COMMON_SEED=42
//!     CONNECT4_MCTS_WALKS=500
//!     CONNECT4_MCTS_EXPLORATION=1.0
//!     CONNECT4_ARENA_RED=mcts
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, try_load_from_path, ConfigError,
    CONFIG_ENV_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;
