use std::fmt;
use std::str::FromStr;

use crate::error::ParseHeightError;

/// Height of the table body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BodyHeight {
    /// Sized by content
    #[default]
    Auto,
    Pixels(u32),
    /// Any other CSS length, passed through as written
    Css(String),
}

impl BodyHeight {
    pub fn pixels(&self) -> Option<u32> {
        match self {
            BodyHeight::Pixels(px) => Some(*px),
            _ => None,
        }
    }

    /// Apply the virtual-mode default.
    ///
    /// A virtual body must not grow with its content, so `Auto` becomes
    /// `default_px` there.
    pub fn resolve(&self, virtual_mode: bool, default_px: u32) -> BodyHeight {
        match self {
            BodyHeight::Auto if virtual_mode => BodyHeight::Pixels(default_px),
            other => other.clone(),
        }
    }
}

impl From<u32> for BodyHeight {
    fn from(px: u32) -> Self {
        BodyHeight::Pixels(px)
    }
}

impl FromStr for BodyHeight {
    type Err = ParseHeightError;

    /// Digits are pixels, blank is auto, anything else is CSS.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(BodyHeight::Auto);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse()
                .map(BodyHeight::Pixels)
                .map_err(|_| ParseHeightError::OutOfRange(s.to_string()));
        }
        Ok(BodyHeight::Css(s.to_string()))
    }
}

impl fmt::Display for BodyHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyHeight::Auto => f.write_str("auto"),
            BodyHeight::Pixels(px) => write!(f, "{}px", px),
            BodyHeight::Css(css) => f.write_str(css),
        }
    }
}
