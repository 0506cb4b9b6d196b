//! Stacking of transient overlays (messages and notifications).
//!
//! Entries sharing a placement are laid out one after another from the
//! screen edge, in registration order. Removing an entry closes the gap it
//! leaves on the next layout.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::config::StackConfig;

/// Screen anchor of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Centered at the top (messages)
    Top,
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Placement {
    /// Whether entries are offset from the top edge.
    pub fn is_top(self) -> bool {
        matches!(self, Placement::Top | Placement::TopRight | Placement::TopLeft)
    }
}

/// Identity of a stacked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackEntryId(u64);

impl StackEntryId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for StackEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StackEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__stack_{}", self.0)
    }
}

/// Computed edge offset of an entry. Exactly one of `top`/`bottom` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackPosition {
    pub id: StackEntryId,
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

#[derive(Debug, Clone)]
struct StackEntry {
    id: StackEntryId,
    placement: Placement,
    /// Measured height; `None` until laid out
    height: Option<u32>,
}

/// Owns the displayed entries of every placement.
#[derive(Debug, Default)]
pub struct StackManager {
    config: StackConfig,
    entries: Vec<StackEntry>,
}

impl StackManager {
    pub fn new(config: StackConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Add an entry at the end of its placement's stack.
    ///
    /// Returns false if `id` is already registered.
    pub fn register(&mut self, id: StackEntryId, placement: Placement, height: Option<u32>) -> bool {
        if self.entries.iter().any(|e| e.id == id) {
            return false;
        }
        log::debug!("[stack] register {} at {:?}", id, placement);
        self.entries.push(StackEntry {
            id,
            placement,
            height,
        });
        true
    }

    /// Remove an entry. Returns false if it was not registered.
    pub fn unregister(&mut self, id: StackEntryId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        log::debug!("[stack] unregister {}", id);
        true
    }

    /// Record the measured height of an entry.
    pub fn set_height(&mut self, id: StackEntryId, height: u32) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.height = Some(height);
                true
            }
            None => false,
        }
    }

    pub fn placement_of(&self, id: StackEntryId) -> Option<Placement> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.placement)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offsets of every entry at `placement`, in stacking order.
    pub fn positions(&self, placement: Placement) -> Vec<StackPosition> {
        let fallback = match placement {
            Placement::Top => self.config.message_fallback_height,
            _ => self.config.notification_fallback_height,
        };
        let mut offset = self.config.offset;
        self.entries
            .iter()
            .filter(|e| e.placement == placement)
            .map(|entry| {
                let position = if placement.is_top() {
                    StackPosition {
                        id: entry.id,
                        top: Some(offset),
                        bottom: None,
                    }
                } else {
                    StackPosition {
                        id: entry.id,
                        top: None,
                        bottom: Some(offset),
                    }
                };
                // Zero means the entry has not been laid out yet.
                let height = entry.height.filter(|h| *h > 0).unwrap_or(fallback);
                offset = offset.saturating_add(height).saturating_add(self.config.gap);
                position
            })
            .collect()
    }

    /// Remove every entry, returning their ids in registration order.
    pub fn close_all(&mut self) -> Vec<StackEntryId> {
        self.entries.drain(..).map(|e| e.id).collect()
    }
}
