//! Table component state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use vscroll::{
    BoxSize, FrameScheduler, NodeId, ResizeBridge, ResizeChange, SizePreset, WindowCalculator,
    WindowInput, WindowState, effective_container_width, render_slots, resolve_row_height,
    resolve_widths, total_height,
};

use super::height::BodyHeight;
use super::item::{Alignment, Column, TableRow};
use super::key::RowKey;
use super::props::{HeightProp, TableProps};
use super::sort::{SortState, next_order};
use super::view::{
    BodyView, CellContent, CellView, ColumnSource, DisplayColumn, HeaderCell, HeaderView,
    RowView, SELECTION_COLUMN_KEY, TableLayout, TableView,
};
use crate::components::events::{EventResult, TableEvent};
use crate::components::selection::{SelectedKeys, SelectionMode};
use crate::config::TableConfig;
use crate::error::Result;

/// Unique identifier for a Table component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Scroll position and height of the body viewport, as read on a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: u32,
}

/// The highlighted row. Compared by key when the row has one.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CurrentRow {
    index: usize,
    key: Option<String>,
}

impl CurrentRow {
    fn matches(&self, index: usize, key: Option<&str>) -> bool {
        match (&self.key, key) {
            (Some(current), Some(key)) => current == key,
            _ => self.index == index,
        }
    }
}

/// A table over caller-owned rows.
///
/// Rows, columns, and selected keys are inputs: the table reads them and
/// raises events, but never changes them on its own. Its own state is the
/// sort order, the current row, and the virtual-scroll window.
///
/// Virtual scrolling switches on when `virtual_mode` is set and the row count
/// reaches `virtual_threshold`. The host then drives it with:
/// - `on_scroll` for every scroll event (cheap, only schedules a frame)
/// - `on_animation_frame` once per display frame
/// - `after_render` / `on_resize` with the body node's size
/// - `disconnect` when the table goes away
#[derive(Debug)]
pub struct Table<T: TableRow> {
    id: TableId,
    config: TableConfig,
    calculator: WindowCalculator,

    data: Vec<T>,
    columns: Vec<Column<T>>,
    size: SizePreset,
    row_height: Option<u32>,
    virtual_mode: bool,
    virtual_threshold: usize,
    height: BodyHeight,
    row_key: RowKey<T>,
    stripe: bool,
    border: bool,
    highlight_current_row: bool,
    empty_text: String,
    selection_mode: Option<SelectionMode>,
    selected: SelectedKeys,

    sort: Option<SortState>,
    current_row: Option<CurrentRow>,

    /// Committed first slot index
    first_index: usize,
    /// Measured body height; 0 until measured
    viewport_height: u32,
    /// Measured body width; `None` until measured
    measured_width: Option<u32>,
    /// Latest scroll event, consumed on the next frame
    scroll: ScrollMetrics,
    frames: FrameScheduler,
    resize: ResizeBridge,
    events: Vec<TableEvent>,
}

impl<T: TableRow> Table<T> {
    /// Create an empty table.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_config(columns, TableConfig::default())
    }

    /// Create a table with initial rows.
    pub fn with_data(columns: Vec<Column<T>>, data: Vec<T>) -> Self {
        let mut table = Self::new(columns);
        table.data = data;
        table
    }

    pub fn with_config(columns: Vec<Column<T>>, config: TableConfig) -> Self {
        Self {
            id: TableId::new(),
            calculator: WindowCalculator::new(config.window.overhang),
            data: Vec::new(),
            columns,
            size: SizePreset::default(),
            row_height: None,
            virtual_mode: true,
            virtual_threshold: config.virtual_threshold,
            height: BodyHeight::Auto,
            row_key: RowKey::default(),
            stripe: false,
            border: false,
            highlight_current_row: false,
            empty_text: config.empty_text.clone(),
            selection_mode: None,
            selected: SelectedKeys::default(),
            sort: None,
            current_row: None,
            first_index: 0,
            viewport_height: 0,
            measured_width: None,
            scroll: ScrollMetrics::default(),
            frames: FrameScheduler::new(),
            resize: ResizeBridge::new(),
            events: Vec::new(),
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Builders
    // -------------------------------------------------------------------------

    pub fn with_size(mut self, size: SizePreset) -> Self {
        self.size = size;
        self
    }

    /// Fix the row height in pixels, overriding the size preset.
    pub fn with_row_height(mut self, height: u32) -> Self {
        self.row_height = Some(height);
        self
    }

    pub fn with_virtual_mode(mut self, enabled: bool) -> Self {
        self.virtual_mode = enabled;
        self
    }

    pub fn with_virtual_threshold(mut self, threshold: usize) -> Self {
        self.virtual_threshold = threshold;
        self
    }

    pub fn with_height(mut self, height: impl Into<BodyHeight>) -> Self {
        self.height = height.into();
        self
    }

    pub fn with_row_key(mut self, row_key: RowKey<T>) -> Self {
        self.row_key = row_key;
        self
    }

    pub fn with_stripe(mut self, stripe: bool) -> Self {
        self.stripe = stripe;
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_highlight_current_row(mut self, highlight: bool) -> Self {
        self.highlight_current_row = highlight;
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = Some(mode);
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replace the rows.
    ///
    /// The committed window is kept; rendering re-clamps it to the new count.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        if let Some(current) = &self.current_row
            && current.key.is_none()
            && current.index >= self.data.len()
        {
            self.current_row = None;
        }
        if !self.is_virtual() {
            self.disconnect();
        }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        self.columns = columns;
    }

    pub fn set_virtual_mode(&mut self, enabled: bool) {
        self.virtual_mode = enabled;
        if !self.is_virtual() {
            self.disconnect();
        }
    }

    pub fn set_height(&mut self, height: impl Into<BodyHeight>) {
        self.height = height.into();
    }

    pub fn set_selection_mode(&mut self, mode: Option<SelectionMode>) {
        self.selection_mode = mode;
    }

    pub fn selection_mode(&self) -> Option<SelectionMode> {
        self.selection_mode
    }

    /// Set the selected row keys (controlled).
    pub fn set_selected_keys(&mut self, keys: Vec<String>) {
        self.selected = SelectedKeys::new(keys);
    }

    pub fn selected_keys(&self) -> &[String] {
        self.selected.as_slice()
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Set the sort state from outside, e.g. to restore it.
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    /// Data index of the current row, if any.
    pub fn current_row(&self) -> Option<usize> {
        let current = self.current_row.as_ref()?;
        match &current.key {
            Some(key) => self
                .data
                .iter()
                .position(|row| self.row_key.key_of(row).as_deref() == Some(key.as_str())),
            None => Some(current.index),
        }
    }

    /// Apply string-typed attributes.
    ///
    /// Nothing is changed if any attribute is invalid.
    pub fn apply_props(&mut self, props: TableProps) -> Result<()> {
        let size = props.size.as_deref().map(str::parse::<SizePreset>).transpose()?;
        let height = match props.height {
            Some(HeightProp::Pixels(px)) => Some(BodyHeight::Pixels(px)),
            Some(HeightProp::Text(text)) => Some(text.parse::<BodyHeight>()?),
            None => None,
        };

        if let Some(size) = size {
            self.size = size;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if let Some(row_height) = props.row_height {
            self.row_height = Some(row_height);
        }
        if let Some(threshold) = props.virtual_threshold {
            self.virtual_threshold = threshold;
        }
        if let Some(field) = props.row_key {
            self.row_key = RowKey::Field(field);
        }
        if let Some(stripe) = props.stripe {
            self.stripe = stripe;
        }
        if let Some(border) = props.border {
            self.border = border;
        }
        if let Some(highlight) = props.highlight_current_row {
            self.highlight_current_row = highlight;
        }
        if let Some(text) = props.empty_text {
            self.empty_text = text;
        }
        if let Some(mode) = props.selection_mode {
            self.selection_mode = Some(mode);
        }
        if let Some(keys) = props.selected_row_keys {
            self.set_selected_keys(keys);
        }
        if let Some(enabled) = props.virtual_mode {
            self.virtual_mode = enabled;
        }
        if !self.is_virtual() {
            self.disconnect();
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Derived layout
    // -------------------------------------------------------------------------

    /// Whether rows are rendered through the virtual window.
    pub fn is_virtual(&self) -> bool {
        self.virtual_mode && self.data.len() >= self.virtual_threshold
    }

    pub fn effective_row_height(&self) -> u32 {
        resolve_row_height(self.size, self.row_height)
    }

    /// Whether any data column lacks a width.
    pub fn has_flex_column(&self) -> bool {
        self.columns.iter().any(Column::is_flexible)
    }

    pub fn measured_width(&self) -> Option<u32> {
        self.measured_width
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Columns as rendered by both header and body.
    ///
    /// In virtual mode flexible columns get concrete widths, because
    /// absolutely positioned rows cannot flex against the header. The
    /// selection column comes first when a selection mode is set.
    pub fn display_columns(&self) -> Vec<DisplayColumn> {
        let widths: Vec<Option<u32>> = self.columns.iter().map(|c| c.width).collect();
        let widths: Vec<Option<u32>> = if self.is_virtual() && self.has_flex_column() {
            let container = effective_container_width(
                self.measured_width,
                self.config.window.placeholder_width,
            );
            resolve_widths(&widths, container).into_iter().map(Some).collect()
        } else {
            widths
        };

        let selection = self.selection_mode.map(|_| DisplayColumn {
            key: SELECTION_COLUMN_KEY.to_string(),
            width: Some(self.config.selection_column_width),
            align: Alignment::Center,
            fixed: None,
            sortable: false,
            source: ColumnSource::Selection,
        });

        selection
            .into_iter()
            .chain(self.columns.iter().zip(widths).enumerate().map(
                |(index, (column, width))| DisplayColumn {
                    key: column.column_key().to_string(),
                    width,
                    align: column.align,
                    fixed: column.fixed,
                    sortable: column.sortable,
                    source: ColumnSource::Data(index),
                },
            ))
            .collect()
    }

    /// Sum of explicit display widths.
    pub fn total_column_width(&self) -> u32 {
        self.display_columns()
            .iter()
            .filter_map(|c| c.width)
            .fold(0u32, u32::saturating_add)
    }

    /// Whether header and body get a fixed pixel width.
    ///
    /// Only in virtual mode with no flexible columns; flexible columns make
    /// the table fill its container instead.
    pub fn uses_fixed_table_width(&self) -> bool {
        !self.has_flex_column() && self.is_virtual() && self.total_column_width() > 0
    }

    /// Fixed table width including the scrollbar gutter.
    pub fn table_width(&self) -> Option<u32> {
        self.uses_fixed_table_width()
            .then(|| self.total_column_width().saturating_add(self.config.scrollbar_gutter))
    }

    pub fn body_height(&self) -> BodyHeight {
        self.height
            .resolve(self.is_virtual(), self.config.default_body_height)
    }

    /// Minimum height of body plus header, so a flex parent cannot collapse
    /// a virtual body.
    pub fn wrapper_min_height(&self) -> Option<u32> {
        if !self.is_virtual() {
            return None;
        }
        self.body_height()
            .pixels()
            .map(|px| px.saturating_add(self.config.header_height))
    }

    // -------------------------------------------------------------------------
    // Virtual scrolling
    // -------------------------------------------------------------------------

    /// Viewport height the window is computed for.
    fn window_viewport_height(&self) -> u32 {
        if self.viewport_height > 0 {
            self.viewport_height
        } else {
            self.config
                .window
                .fallback_visible_rows
                .saturating_mul(self.effective_row_height())
        }
    }

    /// The window to render, re-clamped against the current rows.
    pub fn window(&self) -> WindowState {
        if !self.is_virtual() {
            return WindowState::empty(self.viewport_height, self.effective_row_height());
        }
        self.calculator.reclamp(
            self.data.len(),
            self.effective_row_height(),
            self.window_viewport_height(),
            self.first_index,
        )
    }

    /// Total scrollable height of the body in virtual mode.
    pub fn total_height(&self) -> u64 {
        total_height(self.data.len(), self.effective_row_height())
    }

    /// Record a scroll event. Returns true if it scheduled a frame.
    ///
    /// The window is not recomputed here; any number of scroll events before
    /// the next frame fold into one `on_animation_frame` computation, which
    /// sees only the latest metrics.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        self.scroll = metrics;
        if !self.is_virtual() {
            return false;
        }
        self.frames.request()
    }

    /// Run the pending frame, if any. Returns true if a re-render is needed.
    pub fn on_animation_frame(&mut self) -> bool {
        if !self.frames.begin_frame() {
            return false;
        }
        if !self.is_virtual() || self.data.is_empty() || self.effective_row_height() == 0 {
            return false;
        }

        let mut rerender = false;
        let client_height = self.scroll.client_height;
        if client_height > 0 && client_height != self.viewport_height {
            self.viewport_height = client_height;
            rerender = true;
        }
        rerender |= self.recompute_window();
        rerender
    }

    /// Number of scroll events folded into an already pending frame.
    pub fn coalesced_scrolls(&self) -> u64 {
        self.frames.coalesced()
    }

    fn recompute_window(&mut self) -> bool {
        let input = WindowInput {
            row_count: self.data.len(),
            row_height: self.effective_row_height(),
            viewport_height: self.window_viewport_height(),
            scroll_top: self.scroll.scroll_top,
        };
        let update = self.calculator.compute(&input, self.first_index);
        if update.changed {
            log::debug!(
                "[table] {} window {}..{}",
                self.id,
                update.state.first_index,
                update.state.first_index + update.state.slot_count
            );
            self.first_index = update.state.first_index;
        }
        update.changed
    }

    /// Hook for after each render with the body node and its size.
    ///
    /// Attaches the resize observer to `body` in virtual mode, detaching it
    /// from any previous node, and detaches it outside virtual mode. Returns
    /// true if the measurement calls for another render.
    pub fn after_render(&mut self, body: NodeId, size: BoxSize) -> bool {
        if !self.is_virtual() {
            self.disconnect();
            return false;
        }
        self.resize.observe(body);
        self.on_resize(body, size)
    }

    /// Deliver a resize observation. Returns true if a re-render is needed.
    pub fn on_resize(&mut self, node: NodeId, size: BoxSize) -> bool {
        match self.resize.notify(node, size) {
            Some(change) => self.apply_resize(change),
            None => false,
        }
    }

    fn apply_resize(&mut self, change: ResizeChange) -> bool {
        let mut rerender = false;
        let BoxSize { width, height } = change.size;

        if change.width_changed && width > 0 && self.measured_width != Some(width) {
            self.measured_width = Some(width);
            // Fixed columns do not depend on the container width.
            rerender |= self.has_flex_column();
        }
        if change.height_changed && height > 0 && height != self.viewport_height {
            self.viewport_height = height;
            self.recompute_window();
            rerender = true;
        }
        rerender
    }

    /// Detach the resize observer.
    pub fn disconnect(&mut self) {
        self.resize.disconnect();
    }

    /// Node the resize observer is attached to.
    pub fn observed_node(&self) -> Option<NodeId> {
        self.resize.target()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    pub fn render(&self) -> TableView {
        let columns = self.display_columns();
        TableView {
            header: self.render_header(&columns),
            body: self.render_body(&columns),
            layout: self.layout(),
        }
    }

    pub fn layout(&self) -> TableLayout {
        let fixed = self.uses_fixed_table_width();
        TableLayout {
            body_height: self.body_height(),
            wrapper_min_height: self.wrapper_min_height(),
            total_column_width: fixed.then(|| self.total_column_width()),
            table_width: self.table_width(),
            virtual_mode: self.is_virtual(),
            bordered: self.border,
        }
    }

    fn render_header(&self, columns: &[DisplayColumn]) -> HeaderView {
        let cells = columns
            .iter()
            .map(|display| match display.source {
                ColumnSource::Selection => HeaderCell {
                    key: display.key.clone(),
                    title: String::new(),
                    width: display.width,
                    align: display.align,
                    sortable: false,
                    sort: None,
                    select_all: (self.selection_mode == Some(SelectionMode::Multiple))
                        .then(|| self.selected.header_state(&self.all_keys())),
                },
                ColumnSource::Data(index) => {
                    let column = &self.columns[index];
                    let title = match &column.header_renderer {
                        Some(render) => render(column, index),
                        None => column.header_title().to_string(),
                    };
                    let sort = self
                        .sort
                        .as_ref()
                        .filter(|s| s.column_key == display.key)
                        .map(|s| s.order);
                    HeaderCell {
                        key: display.key.clone(),
                        title,
                        width: display.width,
                        align: display.align,
                        sortable: display.sortable,
                        sort,
                        select_all: None,
                    }
                }
            })
            .collect();
        HeaderView {
            cells,
            width: self.table_width(),
        }
    }

    fn render_body(&self, columns: &[DisplayColumn]) -> BodyView {
        if self.data.is_empty() {
            return BodyView::Empty {
                text: self.empty_text.clone(),
            };
        }
        if !self.is_virtual() {
            let rows = self
                .data
                .iter()
                .enumerate()
                .map(|(index, row)| self.render_row(index, row, columns))
                .collect();
            return BodyView::Rows(rows);
        }

        let window = self.window();
        BodyView::Virtual {
            total_height: self.total_height(),
            row_height: window.row_height,
            slots: render_slots(&window, &self.data, |index, row| {
                self.render_row(index, row, columns)
            }),
        }
    }

    fn render_row(&self, index: usize, row: &T, columns: &[DisplayColumn]) -> RowView {
        let key = self.row_key.key_of(row);
        let selected = key.as_deref().is_some_and(|k| self.selected.contains(k));
        let current = self.highlight_current_row
            && self
                .current_row
                .as_ref()
                .is_some_and(|c| c.matches(index, key.as_deref()));

        let cells = columns
            .iter()
            .map(|display| {
                let content = match (display.source, self.selection_mode) {
                    (ColumnSource::Selection, Some(mode)) => CellContent::Selection {
                        mode,
                        checked: selected,
                    },
                    (ColumnSource::Selection, None) => CellContent::Text(String::new()),
                    (ColumnSource::Data(column_index), _) => CellContent::Text(
                        self.columns[column_index].render_cell(row, index, column_index),
                    ),
                };
                CellView {
                    column_key: display.key.clone(),
                    width: display.width,
                    align: display.align,
                    content,
                }
            })
            .collect();

        RowView {
            index,
            key,
            cells,
            current,
            selected,
            striped: self.stripe && index % 2 == 1,
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Handle a click on a header cell.
    pub fn click_header(&mut self, column_key: &str) -> EventResult {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.column_key() == column_key && c.sortable);
        if !sortable {
            return EventResult::Ignored;
        }
        let order = next_order(self.sort.as_ref(), column_key);
        self.sort = order.map(|order| SortState {
            column_key: column_key.to_string(),
            order,
        });
        self.emit(TableEvent::SortChanged {
            column_key: column_key.to_string(),
            order,
        });
        EventResult::Consumed
    }

    /// Handle a click on a data row.
    ///
    /// Moves the current row; in single selection mode also proposes the
    /// row as the selection.
    pub fn click_row(&mut self, index: usize) -> EventResult {
        let Some(row) = self.data.get(index) else {
            return EventResult::Ignored;
        };
        let key = self.row_key.key_of(row);
        let next = CurrentRow {
            index,
            key: key.clone(),
        };
        let previous = self.current_row.replace(next.clone());
        let previous_index = previous.as_ref().map(|p| p.index);

        if self.selection_mode == Some(SelectionMode::Single)
            && let Some(key) = &key
        {
            self.emit(TableEvent::SelectionChanged {
                keys: vec![key.clone()],
                rows: vec![index],
            });
        }
        self.emit(TableEvent::RowClicked {
            index,
            key: key.clone(),
        });
        if self.highlight_current_row && previous.as_ref() != Some(&next) {
            self.emit(TableEvent::CurrentRowChanged {
                current: index,
                previous: previous_index,
            });
        }
        EventResult::Consumed
    }

    /// Handle the selection control of a row.
    ///
    /// Multiple mode toggles the row's key; single mode proposes the row
    /// alone. Rows without a key cannot be selected.
    pub fn toggle_row(&mut self, index: usize) -> EventResult {
        let Some(mode) = self.selection_mode else {
            return EventResult::Ignored;
        };
        let Some(key) = self.data.get(index).and_then(|row| self.row_key.key_of(row)) else {
            log::warn!("[table] {} row {} has no key, not selectable", self.id, index);
            return EventResult::Ignored;
        };
        let keys = match mode {
            SelectionMode::Single => vec![key],
            SelectionMode::Multiple => self.selected.toggled(&key),
        };
        let rows = self.indices_of(&keys);
        self.emit(TableEvent::SelectionChanged { keys, rows });
        EventResult::Consumed
    }

    /// Handle the header "select all" checkbox (multiple mode only).
    pub fn select_all(&mut self, checked: bool) -> EventResult {
        if self.selection_mode != Some(SelectionMode::Multiple) {
            return EventResult::Ignored;
        }
        let (keys, rows): (Vec<String>, Vec<usize>) = if checked {
            self.data
                .iter()
                .enumerate()
                .filter_map(|(index, row)| self.row_key.key_of(row).map(|key| (key, index)))
                .unzip()
        } else {
            (Vec::new(), Vec::new())
        };
        self.emit(TableEvent::SelectionChanged { keys, rows });
        EventResult::Consumed
    }

    /// Take the events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: TableEvent) {
        log::debug!("[table] {} emit {}", self.id, event.name());
        self.events.push(event);
    }

    fn all_keys(&self) -> Vec<String> {
        self.data
            .iter()
            .filter_map(|row| self.row_key.key_of(row))
            .collect()
    }

    /// Data indices of `keys`, skipping keys with no row.
    fn indices_of(&self, keys: &[String]) -> Vec<usize> {
        let positions: HashMap<String, usize> = self
            .data
            .iter()
            .enumerate()
            .filter_map(|(index, row)| self.row_key.key_of(row).map(|key| (key, index)))
            .collect();
        keys.iter()
            .filter_map(|key| positions.get(key).copied())
            .collect()
    }
}
