use serde::{Deserialize, Serialize};

use crate::column::PLACEHOLDER_WIDTH;
use crate::error::ConfigError;
use crate::window::DEFAULT_OVERHANG;

/// Tunables of the windowing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Extra rows rendered above and below the visible area.
    pub overhang: usize,
    /// Container width assumed before the first measurement.
    pub placeholder_width: u32,
    /// Visible rows assumed before the viewport height is measured.
    pub fallback_visible_rows: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            overhang: DEFAULT_OVERHANG,
            placeholder_width: PLACEHOLDER_WIDTH,
            fallback_visible_rows: 25,
        }
    }
}

impl WindowConfig {
    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder_width == 0 {
            return Err(ConfigError::zero("placeholder_width"));
        }
        if self.fallback_visible_rows == 0 {
            return Err(ConfigError::zero("fallback_visible_rows"));
        }
        Ok(())
    }
}
