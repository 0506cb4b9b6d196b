//! TableRow trait and Column types for table display.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

/// Trait for records that can be displayed as table rows.
///
/// The table reads cell values and row keys by field name and never
/// modifies a row.
///
/// # Examples
///
/// ```
/// use nvkit::components::TableRow;
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn field(&self, key: &str) -> Option<String> {
///         match key {
///             "id" => Some(self.id.to_string()),
///             "name" => Some(self.name.clone()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Display value of a field, or `None` if the row has no such field.
    fn field(&self, key: &str) -> Option<String>;
}

impl TableRow for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl TableRow for BTreeMap<String, String> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl TableRow for Map<String, Value> {
    fn field(&self, key: &str) -> Option<String> {
        self.get(key).and_then(json_display)
    }
}

impl TableRow for Value {
    fn field(&self, key: &str) -> Option<String> {
        self.as_object().and_then(|object| object.field(key))
    }
}

/// Strings unquoted, `null` as missing, everything else as JSON text.
fn json_display(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// What a cell renderer gets to work with.
pub struct CellContext<'a, T> {
    pub row: &'a T,
    pub column: &'a Column<T>,
    /// `row.field(column.data_key)`
    pub value: Option<String>,
    pub row_index: usize,
    pub column_index: usize,
}

pub type CellRenderer<T> = Arc<dyn Fn(&CellContext<'_, T>) -> String + Send + Sync>;
pub type HeaderRenderer<T> = Arc<dyn Fn(&Column<T>, usize) -> String + Send + Sync>;

/// Column configuration.
///
/// A column without a width is flexible: in virtual mode it shares the
/// container width left over by the fixed columns.
///
/// # Examples
///
/// ```
/// use nvkit::components::{Alignment, Column};
/// use serde_json::Value;
///
/// let columns: Vec<Column<Value>> = vec![
///     Column::new("id").title("ID").width(80),
///     Column::new("name").title("Name").sortable(),
///     Column::new("status").align(Alignment::Center),
/// ];
/// assert!(columns[1].is_flexible());
/// ```
pub struct Column<T> {
    /// Column identity; defaults to `data_key`
    pub key: Option<String>,
    /// Field read from each row
    pub data_key: String,
    /// Header text; defaults to `data_key`
    pub title: Option<String>,
    /// Width in pixels; `None` is flexible
    pub width: Option<u32>,
    pub align: Alignment,
    pub fixed: Option<FixedSide>,
    pub sortable: bool,
    pub cell_renderer: Option<CellRenderer<T>>,
    pub header_renderer: Option<HeaderRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a flexible column reading `data_key`.
    pub fn new(data_key: impl Into<String>) -> Self {
        Self {
            key: None,
            data_key: data_key.into(),
            title: None,
            width: None,
            align: Alignment::Left,
            fixed: None,
            sortable: false,
            cell_renderer: None,
            header_renderer: None,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Give the column an explicit width in pixels.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Make the column sortable.
    ///
    /// Clicking a sortable header cycles ascending, descending, unsorted.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Render cells with `f` instead of the raw field value.
    pub fn cell_renderer(
        mut self,
        f: impl Fn(&CellContext<'_, T>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.cell_renderer = Some(Arc::new(f));
        self
    }

    /// Render the header with `f` instead of the title.
    pub fn header_renderer(
        mut self,
        f: impl Fn(&Column<T>, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.header_renderer = Some(Arc::new(f));
        self
    }

    /// Column identity: `key`, else `data_key`.
    pub fn column_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.data_key)
    }

    /// Header text: `title`, else `data_key`.
    pub fn header_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.data_key)
    }

    pub fn is_flexible(&self) -> bool {
        self.width.is_none()
    }
}

impl<T: TableRow> Column<T> {
    /// Cell text for `row`.
    pub fn render_cell(&self, row: &T, row_index: usize, column_index: usize) -> String {
        let value = row.field(&self.data_key);
        match &self.cell_renderer {
            Some(render) => render(&CellContext {
                row,
                column: self,
                value,
                row_index,
                column_index,
            }),
            None => value.unwrap_or_default(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            data_key: self.data_key.clone(),
            title: self.title.clone(),
            width: self.width,
            align: self.align,
            fixed: self.fixed,
            sortable: self.sortable,
            cell_renderer: self.cell_renderer.clone(),
            header_renderer: self.header_renderer.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.column_key())
            .field("data_key", &self.data_key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("fixed", &self.fixed)
            .field("sortable", &self.sortable)
            .field("cell_renderer", &self.cell_renderer.is_some())
            .finish()
    }
}

/// Give every flexible column its share of `container_width`.
///
/// Fixed columns are returned unchanged. With no flexible columns the list
/// comes back as is.
pub fn resolve_columns<T>(columns: &[Column<T>], container_width: u32) -> Vec<Column<T>> {
    let widths: Vec<Option<u32>> = columns.iter().map(|c| c.width).collect();
    let resolved = vscroll::resolve_widths(&widths, container_width);
    columns
        .iter()
        .zip(resolved)
        .map(|(column, width)| {
            let mut column = column.clone();
            column.width = Some(width);
            column
        })
        .collect()
}
