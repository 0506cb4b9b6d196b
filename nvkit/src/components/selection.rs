//! Selection types shared by selectable components.
//!
//! Selection is controlled: the embedder owns the selected keys and hands
//! them to the component, which only reads them. Operations here compute the
//! proposed next key list without touching the current one. Keys are string
//! row ids so a selection stays valid when rows move.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Selection mode for components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One row at a time (radio)
    Single,
    /// Any number of rows (checkbox)
    Multiple,
}

/// Tri-state of a "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectAllState {
    pub checked: bool,
    pub indeterminate: bool,
}

/// Read-only view over the embedder's selected keys.
#[derive(Debug, Clone, Default)]
pub struct SelectedKeys {
    /// Keys in the order the embedder gave them
    keys: Vec<String>,
    lookup: HashSet<String>,
}

impl SelectedKeys {
    pub fn new(keys: Vec<String>) -> Self {
        let lookup = keys.iter().cloned().collect();
        Self { keys, lookup }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys after toggling `key`: removed if present, else appended.
    pub fn toggled(&self, key: &str) -> Vec<String> {
        if self.contains(key) {
            self.keys.iter().filter(|k| *k != key).cloned().collect()
        } else {
            let mut next = self.keys.clone();
            next.push(key.to_string());
            next
        }
    }

    /// Header checkbox state given every selectable key.
    ///
    /// Checked when every key is selected; indeterminate when something is
    /// selected but not everything.
    pub fn header_state(&self, all_keys: &[String]) -> SelectAllState {
        let all = !all_keys.is_empty() && all_keys.iter().all(|k| self.contains(k));
        SelectAllState {
            checked: all,
            indeterminate: !self.is_empty() && !all,
        }
    }
}

impl PartialEq for SelectedKeys {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Eq for SelectedKeys {}
