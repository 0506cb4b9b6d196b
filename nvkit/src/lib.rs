pub mod components;
pub mod config;
pub mod error;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::components::{
        Alignment, BodyHeight, BodyView, CellContent, CellContext, Column, EventResult,
        FixedSide, HeaderView, Placement, RowKey, RowView, ScrollMetrics, SelectedKeys,
        SelectionMode, SortOrder, SortState, StackEntryId, StackManager, Table, TableEvent,
        TableId, TableProps, TableRow, TableView,
    };
    pub use crate::config::{StackConfig, TableConfig};
    pub use crate::error::{Error, Result};

    pub use vscroll::{BoxSize, NodeId, SizePreset, WindowState};
}
