use serde::{Deserialize, Serialize};

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Active sort of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_key: String,
    pub order: SortOrder,
}

/// Order after clicking `column_key`'s header.
///
/// The same column cycles ascending, descending, unsorted; another column
/// starts at ascending.
pub fn next_order(current: Option<&SortState>, column_key: &str) -> Option<SortOrder> {
    match current {
        Some(state) if state.column_key == column_key => match state.order {
            SortOrder::Ascending => Some(SortOrder::Descending),
            SortOrder::Descending => None,
        },
        _ => Some(SortOrder::Ascending),
    }
}

/// Header glyph for a column's sort order.
pub fn sort_indicator(order: Option<SortOrder>) -> &'static str {
    match order {
        Some(SortOrder::Ascending) => "↑",
        Some(SortOrder::Descending) => "↓",
        None => "⇅",
    }
}
