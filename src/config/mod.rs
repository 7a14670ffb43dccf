//! Configuration module.
//!
//! Resolution order: Defaults → Config File → Env Vars → CLI Args.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, DEFAULT_ESTIMATED_ROW_HEIGHT, DEFAULT_HIDE_REPLIES_LABEL,
    DEFAULT_REPLY_COUNT, DEFAULT_SHOW_REPLIES_LABEL,
};
