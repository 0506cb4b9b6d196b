//! Component configuration.
//!
//! Every field has a default, so a config file only names what it changes.

use serde::{Deserialize, Serialize};
use vscroll::{ConfigError, WindowConfig};

/// Table defaults and layout constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub window: WindowConfig,
    /// Row count at which virtual mode switches on.
    pub virtual_threshold: usize,
    /// Body height used in virtual mode when none is given.
    pub default_body_height: u32,
    pub header_height: u32,
    /// Width reserved for the body's scrollbar so header and body align.
    pub scrollbar_gutter: u32,
    pub selection_column_width: u32,
    pub empty_text: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            virtual_threshold: 100,
            default_body_height: 400,
            header_height: 40,
            scrollbar_gutter: 17,
            selection_column_width: 48,
            empty_text: "No data".to_string(),
        }
    }
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        if self.default_body_height == 0 {
            return Err(ConfigError::zero("default_body_height"));
        }
        Ok(())
    }
}

/// Stacking of messages and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Distance of the first entry from the screen edge.
    pub offset: u32,
    /// Space between entries.
    pub gap: u32,
    /// Height assumed for an unmeasured message.
    pub message_fallback_height: u32,
    /// Height assumed for an unmeasured notification.
    pub notification_fallback_height: u32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            offset: 20,
            gap: 16,
            message_fallback_height: 60,
            notification_fallback_height: 100,
        }
    }
}

impl StackConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.message_fallback_height == 0 {
            return Err(ConfigError::zero("message_fallback_height"));
        }
        if self.notification_fallback_height == 0 {
            return Err(ConfigError::zero("notification_fallback_height"));
        }
        Ok(())
    }
}
