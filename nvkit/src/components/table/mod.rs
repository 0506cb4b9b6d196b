//! Table component - a virtualized table with columns, row selection, and sorting.
//!
//! The Table component provides:
//! - Column-based layout with header and body widths kept in step
//! - Virtual scrolling above a row-count threshold (only the window's rows
//!   are rendered, into stable slots)
//! - Row selection (single or multi-select), controlled by the embedder
//! - Sortable columns (app-controlled)
//!
//! # Example
//!
//! ```
//! use nvkit::prelude::*;
//! use serde_json::json;
//!
//! let rows: Vec<serde_json::Value> = (0..1000)
//!     .map(|i| json!({ "id": i, "name": format!("user {}", i) }))
//!     .collect();
//! let columns = vec![
//!     Column::new("id").title("ID").width(80),
//!     Column::new("name").title("Name").sortable(),
//! ];
//! let mut table = Table::with_data(columns, rows);
//!
//! // Scroll events only schedule a frame; the frame computes the window.
//! table.on_scroll(ScrollMetrics { scroll_top: 4000.0, client_height: 400 });
//! assert!(table.on_animation_frame());
//! assert_eq!(table.window().first_index, 90);
//! ```

mod height;
mod item;
mod key;
mod props;
mod sort;
mod state;
mod view;

pub use height::BodyHeight;
pub use item::{
    Alignment, CellContext, CellRenderer, Column, FixedSide, HeaderRenderer, TableRow,
    resolve_columns,
};
pub use key::RowKey;
pub use props::{HeightProp, TableProps};
pub use sort::{SortOrder, SortState, next_order, sort_indicator};
pub use state::{ScrollMetrics, Table, TableId};
pub use view::{
    BodyView, CellContent, CellView, ColumnSource, DisplayColumn, HeaderCell, HeaderView,
    RowView, SELECTION_COLUMN_KEY, TableLayout, TableView,
};
