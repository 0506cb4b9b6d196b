//! Mapping window slots to data rows.
//!
//! Each slot is positioned by its data index (`index * row_height`), not by
//! its place in the slot list, and keyed by that index. A renderer can
//! therefore reuse the view for `slot-42` however the window shifts.

use std::fmt;

use crate::window::WindowState;

/// Stable key of the slot holding a given data index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(pub usize);

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// A live slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub key: SlotKey,
    /// Data index shown in this slot.
    pub index: usize,
    /// Vertical offset from the top of the scroll content, in pixels.
    pub offset: u64,
}

/// A rendered view placed at a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Positioned<V> {
    pub key: SlotKey,
    pub index: usize,
    pub offset: u64,
    pub view: V,
}

/// Iterate the live slots of a window.
///
/// Slots past `row_count` are skipped. That happens for one frame when the
/// data shrinks before the window is recomputed.
pub fn slots(window: &WindowState, row_count: usize) -> impl Iterator<Item = Slot> + '_ {
    let row_height = u64::from(window.row_height);
    window
        .slot_range()
        .take_while(move |&index| index < row_count)
        .map(move |index| Slot {
            key: SlotKey(index),
            index,
            offset: index as u64 * row_height,
        })
}

/// Render every live slot through `render`.
pub fn render_slots<'a, T, V>(
    window: &WindowState,
    rows: &'a [T],
    mut render: impl FnMut(usize, &'a T) -> V,
) -> Vec<Positioned<V>> {
    slots(window, rows.len())
        .filter_map(|slot| {
            let row = rows.get(slot.index)?;
            Some(Positioned {
                key: slot.key,
                index: slot.index,
                offset: slot.offset,
                view: render(slot.index, row),
            })
        })
        .collect()
}
