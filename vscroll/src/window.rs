//! Window calculation for virtual scrolling.
//!
//! A window is a fixed number of reusable slots laid over a contiguous run of
//! data indices. The slot count covers the visible rows plus `overhang` rows
//! on either side, so a scroll delta that lands between two recomputations
//! still hits rendered rows.

use std::ops::Range;

/// Rows rendered above and below the visible area.
pub const DEFAULT_OVERHANG: usize = 10;

/// Which data indices are materialized, and at what geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowState {
    /// Data index held by the first slot.
    pub first_index: usize,
    /// Number of slots.
    pub slot_count: usize,
    pub viewport_height: u32,
    pub row_height: u32,
}

impl WindowState {
    /// A window with no slots.
    pub const fn empty(viewport_height: u32, row_height: u32) -> Self {
        Self {
            first_index: 0,
            slot_count: 0,
            viewport_height,
            row_height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.slot_count == 0
    }

    /// Data indices covered by the slots.
    pub fn slot_range(&self) -> Range<usize> {
        self.first_index..self.first_index + self.slot_count
    }

    /// Last data index covered, if any.
    pub fn last_index(&self) -> Option<usize> {
        (self.first_index + self.slot_count).checked_sub(1).filter(|_| !self.is_empty())
    }
}

/// Inputs of a window computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowInput {
    pub row_count: usize,
    pub row_height: u32,
    pub viewport_height: u32,
    /// Scroll offset of the viewport in pixels. May be fractional.
    pub scroll_top: f64,
}

/// Result of a window computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowUpdate {
    pub state: WindowState,
    /// True only if `first_index` differs from the previous one.
    pub changed: bool,
}

/// Computes windows for a fixed overhang.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCalculator {
    overhang: usize,
}

impl Default for WindowCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_OVERHANG)
    }
}

impl WindowCalculator {
    pub const fn new(overhang: usize) -> Self {
        Self { overhang }
    }

    pub const fn overhang(&self) -> usize {
        self.overhang
    }

    /// Number of slots needed for the given geometry.
    pub fn slot_count(&self, row_count: usize, row_height: u32, viewport_height: u32) -> usize {
        if row_count == 0 || row_height == 0 {
            return 0;
        }
        let visible_rows = viewport_height.div_ceil(row_height) as usize;
        row_count.min(visible_rows.saturating_add(self.overhang.saturating_mul(2)))
    }

    /// Compute the window for a scroll position.
    ///
    /// `changed` tells the caller whether a re-render is due. Identical inputs
    /// with the same `previous_first` never report a change, which keeps
    /// sub-pixel scroll jitter from re-rendering.
    pub fn compute(&self, input: &WindowInput, previous_first: usize) -> WindowUpdate {
        let WindowInput {
            row_count,
            row_height,
            viewport_height,
            scroll_top,
        } = *input;

        if row_count == 0 || row_height == 0 {
            let state = WindowState::empty(viewport_height, row_height);
            return WindowUpdate {
                state,
                changed: previous_first != 0,
            };
        }

        let slot_count = self.slot_count(row_count, row_height, viewport_height);
        let first_visible_row = first_visible_row(scroll_top, row_height);
        let candidate_first = first_visible_row.saturating_sub(self.overhang);
        let last_possible_first = row_count.saturating_sub(slot_count);
        let first_index = candidate_first.min(last_possible_first);

        let state = WindowState {
            first_index,
            slot_count,
            viewport_height,
            row_height,
        };
        let changed = first_index != previous_first;
        if changed {
            log::trace!(
                "[window] first {} -> {} (slots {}, rows {})",
                previous_first,
                first_index,
                slot_count,
                row_count
            );
        }
        WindowUpdate { state, changed }
    }

    /// Re-clamp an already committed first index against new inputs.
    ///
    /// Used when the row count or the viewport changed without a scroll.
    pub fn reclamp(
        &self,
        row_count: usize,
        row_height: u32,
        viewport_height: u32,
        first_index: usize,
    ) -> WindowState {
        let slot_count = self.slot_count(row_count, row_height, viewport_height);
        if slot_count == 0 {
            return WindowState::empty(viewport_height, row_height);
        }
        WindowState {
            first_index: first_index.min(row_count - slot_count),
            slot_count,
            viewport_height,
            row_height,
        }
    }
}

fn first_visible_row(scroll_top: f64, row_height: u32) -> usize {
    if !scroll_top.is_finite() || scroll_top <= 0.0 {
        return 0;
    }
    // Float to int casts saturate, so huge offsets clamp later.
    (scroll_top / f64::from(row_height)).floor() as usize
}

/// Compute a window with the default overhang.
pub fn compute_window(
    row_count: usize,
    row_height: u32,
    viewport_height: u32,
    scroll_top: f64,
    previous_first: usize,
) -> WindowUpdate {
    WindowCalculator::default().compute(
        &WindowInput {
            row_count,
            row_height,
            viewport_height,
            scroll_top,
        },
        previous_first,
    )
}

/// Height of the full scrollable content, independent of the slot count.
pub fn total_height(row_count: usize, row_height: u32) -> u64 {
    row_count as u64 * u64::from(row_height)
}
