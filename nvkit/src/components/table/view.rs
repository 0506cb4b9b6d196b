//! Render output of a table.
//!
//! Views are plain data: a host (terminal renderer, DOM bridge, test) turns
//! them into pixels or cells.

use vscroll::Positioned;

use super::height::BodyHeight;
use super::item::{Alignment, FixedSide};
use super::sort::SortOrder;
use crate::components::selection::{SelectAllState, SelectionMode};

/// Key of the synthetic selection column.
pub const SELECTION_COLUMN_KEY: &str = "__selection__";

/// Where a display column's cells come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Checkbox / radio column
    Selection,
    /// Index into the table's data columns
    Data(usize),
}

/// A column as laid out for one render, shared by header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayColumn {
    pub key: String,
    pub width: Option<u32>,
    pub align: Alignment,
    pub fixed: Option<FixedSide>,
    pub sortable: bool,
    pub source: ColumnSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub width: Option<u32>,
    pub align: Alignment,
    pub sortable: bool,
    /// Order of this column if it is the sorted one
    pub sort: Option<SortOrder>,
    /// Set on the selection column in multiple mode
    pub select_all: Option<SelectAllState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderView {
    pub cells: Vec<HeaderCell>,
    /// Header width in virtual mode with only fixed columns
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Selection { mode: SelectionMode, checked: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub column_key: String,
    pub width: Option<u32>,
    pub align: Alignment,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Data index
    pub index: usize,
    /// Row identity, if the row has one
    pub key: Option<String>,
    pub cells: Vec<CellView>,
    pub current: bool,
    pub selected: bool,
    pub striped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// No data
    Empty { text: String },
    /// Every row, in order
    Rows(Vec<RowView>),
    /// Only the window's rows, each at its absolute offset
    Virtual {
        total_height: u64,
        row_height: u32,
        slots: Vec<Positioned<RowView>>,
    },
}

impl BodyView {
    /// Number of materialized rows.
    pub fn row_count(&self) -> usize {
        match self {
            BodyView::Empty { .. } => 0,
            BodyView::Rows(rows) => rows.len(),
            BodyView::Virtual { slots, .. } => slots.len(),
        }
    }
}

/// Container geometry of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub body_height: BodyHeight,
    /// Minimum height of the whole table (body + header) in virtual mode
    pub wrapper_min_height: Option<u32>,
    /// Sum of column widths when the table width is fixed
    pub total_column_width: Option<u32>,
    /// Table width including the scrollbar gutter, when fixed
    pub table_width: Option<u32>,
    pub virtual_mode: bool,
    pub bordered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub header: HeaderView,
    pub body: BodyView,
    pub layout: TableLayout,
}
