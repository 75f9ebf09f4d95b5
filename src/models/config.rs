use chrono::FixedOffset;
use serde::Deserialize;

use crate::engine::avatars::{AVATAR_STACK_LIMIT, CARD_AVATAR_LIMIT};

/// Prefix of environment variables overriding file settings,
/// e.g. `DINING_LOG__CARD_AVATAR_LIMIT=2`.
pub const ENV_PREFIX: &str = "DINING_LOG";

/// Settings shared by the services and the command line front-end.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Avatars shown on the collection header before collapsing.
    pub avatar_stack_limit: usize,
    /// Avatars shown on collection cards before collapsing.
    pub card_avatar_limit: usize,
    /// Fixed offset used for day boundaries; the local zone when unset.
    pub utc_offset_minutes: Option<i32>,
    /// Default `env_logger` filter.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            avatar_stack_limit: AVATAR_STACK_LIMIT,
            card_avatar_limit: CARD_AVATAR_LIMIT,
            utc_offset_minutes: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// The configured fixed offset, if any and if representable.
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| minutes.checked_mul(60))
            .and_then(FixedOffset::east_opt)
    }

    /// Layers an optional YAML file under `DINING_LOG__*` environment variables.
    #[cfg(feature = "cli")]
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
