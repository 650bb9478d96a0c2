//! Relay configuration loading and validation.

use crate::{ChannelId, CommunityId, RoleId};
use courier_error::{ConfigError, ConfigErrorKind};
use derive_getters::Getters;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Platform maximum message length in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 2000;

/// On-disk shape of the configuration file. Every field is optional so that
/// missing values can be reported by name instead of as a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RelayConfigFile {
    token: Option<String>,
    community_id: Option<u64>,
    destination_channel_id: Option<u64>,
    authorized_role_id: Option<u64>,
    max_message_length: Option<usize>,
}

/// Process-wide relay configuration.
///
/// Loaded once at startup and shared read-only (behind an `Arc`) with the
/// router and the resolver.
///
/// ```toml
/// token = "bot token, or supply DISCORD_TOKEN instead"
/// community_id = 111111111111111111
/// destination_channel_id = 222222222222222222
/// authorized_role_id = 333333333333333333
/// max_message_length = 2000   # optional
/// ```
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct RelayConfig {
    /// Bot credential
    token: String,
    /// Community whose roles gate access
    community_id: CommunityId,
    /// Staff channel receiving relayed reports
    destination_channel_id: ChannelId,
    /// The single role allowed to submit reports
    authorized_role_id: RoleId,
    /// Maximum characters per outbound message
    max_message_length: usize,
}

impl RelayConfig {
    /// Build and validate a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank or any id is zero.
    pub fn new(
        token: impl Into<String>,
        community_id: CommunityId,
        destination_channel_id: ChannelId,
        authorized_role_id: RoleId,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            token: token.into(),
            community_id,
            destination_channel_id,
            authorized_role_id,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the outbound message length limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max` is zero.
    pub fn with_max_message_length(mut self, max: usize) -> Result<Self, ConfigError> {
        self.max_message_length = max;
        self.validate()?;
        Ok(self)
    }

    /// Load configuration from a TOML file.
    ///
    /// A `token_override` (from the command line or environment) takes
    /// precedence over any token in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// fails validation.
    pub fn from_file(
        path: impl AsRef<Path>,
        token_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading relay configuration");

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::FileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })?;

        Self::from_toml_str(&content, token_override)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or fails validation.
    pub fn from_toml_str(content: &str, token_override: Option<String>) -> Result<Self, ConfigError> {
        let file: RelayConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))?;

        let token = token_override
            .filter(|t| !t.trim().is_empty())
            .or(file.token)
            .ok_or_else(|| missing("token"))?;

        let config = Self {
            token,
            community_id: CommunityId(file.community_id.ok_or_else(|| missing("community_id"))?),
            destination_channel_id: ChannelId(
                file.destination_channel_id
                    .ok_or_else(|| missing("destination_channel_id"))?,
            ),
            authorized_role_id: RoleId(
                file.authorized_role_id
                    .ok_or_else(|| missing("authorized_role_id"))?,
            ),
            max_message_length: file.max_message_length.unwrap_or(DEFAULT_MAX_MESSAGE_LENGTH),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.token.trim().is_empty() {
            return Err(ConfigError::invalid("token", "must not be empty"));
        }
        if self.community_id.get() == 0 {
            return Err(ConfigError::invalid("community_id", "must be a non-zero id"));
        }
        if self.destination_channel_id.get() == 0 {
            return Err(ConfigError::invalid(
                "destination_channel_id",
                "must be a non-zero id",
            ));
        }
        if self.authorized_role_id.get() == 0 {
            return Err(ConfigError::invalid(
                "authorized_role_id",
                "must be a non-zero id",
            ));
        }
        if self.max_message_length == 0 {
            return Err(ConfigError::invalid(
                "max_message_length",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[track_caller]
fn missing(field: &str) -> ConfigError {
    ConfigError::new(ConfigErrorKind::MissingField(field.to_string()))
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("token", &"<redacted>")
            .field("community_id", &self.community_id)
            .field("destination_channel_id", &self.destination_channel_id)
            .field("authorized_role_id", &self.authorized_role_id)
            .field("max_message_length", &self.max_message_length)
            .finish()
    }
}
