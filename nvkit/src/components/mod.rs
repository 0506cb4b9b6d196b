//! UI components with self-managed state.
//!
//! - `table` - virtualized table with columns, selection, and sorting
//! - `stack` - vertical stacking of messages and notifications
//! - `selection` / `events` - shared by the components above

pub mod events;
pub mod selection;
pub mod stack;
pub mod table;

pub use events::{EventResult, TableEvent};
pub use selection::{SelectAllState, SelectedKeys, SelectionMode};
pub use stack::{Placement, StackEntryId, StackManager, StackPosition};
pub use table::{
    Alignment, BodyHeight, BodyView, CellContent, CellContext, CellView, Column, ColumnSource,
    DisplayColumn, FixedSide, HeaderCell, HeaderView, RowKey, RowView, ScrollMetrics, SortOrder,
    SortState, Table, TableId, TableLayout, TableProps, TableRow, TableView, resolve_columns,
};
