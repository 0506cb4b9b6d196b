//! String-typed attribute surface of the table.
//!
//! Hosts that configure components from markup or JSON hand attributes over
//! as `TableProps`; `Table::apply_props` validates and applies them.

use serde::Deserialize;

use crate::components::selection::SelectionMode;
use crate::error::Result;

/// Height attribute: a number of pixels or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HeightProp {
    Pixels(u32),
    Text(String),
}

/// Table attributes. Absent attributes leave the table unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TableProps {
    pub height: Option<HeightProp>,
    #[serde(rename = "virtual")]
    pub virtual_mode: Option<bool>,
    pub virtual_threshold: Option<usize>,
    pub size: Option<String>,
    pub row_height: Option<u32>,
    pub row_key: Option<String>,
    pub stripe: Option<bool>,
    pub border: Option<bool>,
    pub highlight_current_row: Option<bool>,
    pub empty_text: Option<String>,
    pub selection_mode: Option<SelectionMode>,
    pub selected_row_keys: Option<Vec<String>>,
}

impl TableProps {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
