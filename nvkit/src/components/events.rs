//! Component event types.
//!
//! Events are raised to the embedder and never consumed by the component
//! itself. Handlers queue them; the embedder drains the queue after
//! dispatching input.

use super::table::SortOrder;

/// Result of handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Input was ignored, try other handlers.
    Ignored,
    /// Input was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the input was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Notification raised by a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The selection the table proposes. The embedder decides whether to
    /// feed these keys back as the new selection.
    SelectionChanged {
        keys: Vec<String>,
        /// Data indices of the rows behind `keys`.
        rows: Vec<usize>,
    },
    RowClicked {
        index: usize,
        key: Option<String>,
    },
    /// Only raised when current-row highlighting is on.
    CurrentRowChanged {
        current: usize,
        previous: Option<usize>,
    },
    /// `order` is `None` when sorting was cleared.
    SortChanged {
        column_key: String,
        order: Option<SortOrder>,
    },
}

impl TableEvent {
    /// Event name as exposed to embedders.
    pub fn name(&self) -> &'static str {
        match self {
            TableEvent::SelectionChanged { .. } => "selection-change",
            TableEvent::RowClicked { .. } => "row-click",
            TableEvent::CurrentRowChanged { .. } => "current-change",
            TableEvent::SortChanged { .. } => "sort",
        }
    }
}
