use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSizeError;

/// Row height used when nothing more specific is known.
pub const DEFAULT_ROW_HEIGHT: u32 = 40;

/// Size category shared by the table and the other sized components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Mini,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

impl SizePreset {
    pub const ALL: [SizePreset; 5] = [
        SizePreset::Mini,
        SizePreset::Small,
        SizePreset::Medium,
        SizePreset::Large,
        SizePreset::Huge,
    ];

    /// Reference row height in pixels for this preset.
    pub const fn row_height(self) -> u32 {
        match self {
            SizePreset::Mini => 28,
            SizePreset::Small => 32,
            SizePreset::Medium => DEFAULT_ROW_HEIGHT,
            SizePreset::Large => 48,
            SizePreset::Huge => 56,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SizePreset::Mini => "mini",
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
            SizePreset::Huge => "huge",
        }
    }

    /// Parse a preset name, falling back to `Medium` for unknown names.
    ///
    /// Use `str::parse` instead when an unknown name should be rejected.
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ParseSizeError| {
            log::warn!("[size] {}, using medium", err);
            SizePreset::Medium
        })
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizePreset {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SizePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseSizeError(name.to_string()))
    }
}

/// Resolve the per-row pixel height.
///
/// A positive explicit override always wins; otherwise the preset decides.
pub fn resolve_row_height(preset: SizePreset, explicit: Option<u32>) -> u32 {
    match explicit {
        Some(height) if height > 0 => height,
        _ => preset.row_height(),
    }
}
