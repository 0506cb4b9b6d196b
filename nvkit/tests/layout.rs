use nvkit::components::{ColumnSource, resolve_columns};
use nvkit::prelude::*;
use serde_json::{Value, json};

fn rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "id": i, "name": format!("user {}", i), "email": format!("u{}@example.com", i) }))
        .collect()
}

fn fixed_columns() -> Vec<Column<Value>> {
    vec![Column::new("id").width(80), Column::new("name").width(200)]
}

fn flexible_columns() -> Vec<Column<Value>> {
    vec![
        Column::new("id").width(120),
        Column::new("name"),
        Column::new("email"),
    ]
}

fn widths(table: &Table<Value>) -> Vec<Option<u32>> {
    table.display_columns().iter().map(|c| c.width).collect()
}

// ============================================================================
// Column Widths
// ============================================================================

#[test]
fn test_flexible_columns_use_placeholder_before_measurement() {
    let table = Table::with_data(flexible_columns(), rows(1000));
    assert_eq!(widths(&table), vec![Some(120), Some(340), Some(340)]);
}

#[test]
fn test_flexible_columns_share_measured_width() {
    let mut table = Table::with_data(flexible_columns(), rows(1000));
    assert!(table.after_render(NodeId::new(), BoxSize::new(600, 400)));
    assert_eq!(widths(&table), vec![Some(120), Some(240), Some(240)]);
}

#[test]
fn test_flexible_columns_stay_flexible_outside_virtual_mode() {
    let table = Table::with_data(flexible_columns(), rows(10));
    assert_eq!(widths(&table), vec![Some(120), None, None]);
    assert_eq!(table.table_width(), None);
}

#[test]
fn test_resolve_columns_keeps_fixed_widths() {
    let resolved = resolve_columns(&flexible_columns(), 500);
    let widths: Vec<Option<u32>> = resolved.iter().map(|c| c.width).collect();
    assert_eq!(widths, vec![Some(120), Some(190), Some(190)]);
    assert_eq!(resolved[1].column_key(), "name");
}

#[test]
fn test_selection_column_comes_first() {
    let table =
        Table::with_data(fixed_columns(), rows(1000)).with_selection_mode(SelectionMode::Multiple);
    let columns = table.display_columns();
    assert_eq!(columns[0].key, "__selection__");
    assert_eq!(columns[0].width, Some(48));
    assert_eq!(columns[0].source, ColumnSource::Selection);
    assert_eq!(columns[1].source, ColumnSource::Data(0));
    assert_eq!(table.total_column_width(), 328);
    assert_eq!(table.table_width(), Some(345));
}

#[test]
fn test_header_and_body_widths_match() {
    let mut table = Table::with_data(flexible_columns(), rows(1000))
        .with_selection_mode(SelectionMode::Single);
    table.after_render(NodeId::new(), BoxSize::new(1000, 400));

    let view = table.render();
    let header: Vec<Option<u32>> = view.header.cells.iter().map(|c| c.width).collect();
    let BodyView::Virtual { slots, .. } = view.body else {
        panic!("expected virtual body");
    };
    assert!(!slots.is_empty());
    for slot in &slots {
        let body: Vec<Option<u32>> = slot.view.cells.iter().map(|c| c.width).collect();
        assert_eq!(body, header, "row {}", slot.index);
    }
}

// ============================================================================
// Table Layout
// ============================================================================

#[test]
fn test_virtual_layout_with_fixed_columns() {
    let table = Table::with_data(fixed_columns(), rows(1000)).with_border(true);
    let layout = table.layout();
    assert!(layout.virtual_mode);
    assert!(layout.bordered);
    assert_eq!(layout.body_height, BodyHeight::Pixels(400));
    assert_eq!(layout.wrapper_min_height, Some(440));
    assert_eq!(layout.total_column_width, Some(280));
    assert_eq!(layout.table_width, Some(297), "columns + scrollbar gutter");
    assert_eq!(table.render().header.width, Some(297));
}

#[test]
fn test_huge_column_widths_saturate() {
    let columns: Vec<Column<Value>> = vec![Column::new("id").width(u32::MAX)];
    let table = Table::with_data(columns, rows(1000));
    assert_eq!(table.total_column_width(), u32::MAX);
    assert_eq!(table.table_width(), Some(u32::MAX));
}

#[test]
fn test_virtual_layout_with_flexible_columns_fills_container() {
    let table = Table::with_data(flexible_columns(), rows(1000));
    let layout = table.layout();
    assert_eq!(layout.total_column_width, None);
    assert_eq!(layout.table_width, None);
}

#[test]
fn test_plain_layout() {
    let layout = Table::with_data(fixed_columns(), rows(10)).layout();
    assert!(!layout.virtual_mode);
    assert_eq!(layout.body_height, BodyHeight::Auto);
    assert_eq!(layout.wrapper_min_height, None);
    assert_eq!(layout.table_width, None);
}

#[test]
fn test_explicit_heights() {
    let table = Table::with_data(fixed_columns(), rows(1000)).with_height(600u32);
    assert_eq!(table.body_height(), BodyHeight::Pixels(600));
    assert_eq!(table.wrapper_min_height(), Some(640));

    let css: BodyHeight = "50vh".parse().unwrap();
    let table = Table::with_data(fixed_columns(), rows(1000)).with_height(css.clone());
    assert_eq!(table.body_height(), css);
    assert_eq!(table.wrapper_min_height(), None);

    let plain = Table::with_data(fixed_columns(), rows(10)).with_height(300u32);
    assert_eq!(plain.body_height(), BodyHeight::Pixels(300));
    assert_eq!(plain.wrapper_min_height(), None);
}

// ============================================================================
// Body Height Parsing
// ============================================================================

#[test]
fn test_body_height_parsing() {
    assert_eq!("400".parse::<BodyHeight>().unwrap(), BodyHeight::Pixels(400));
    assert_eq!(" 250 ".parse::<BodyHeight>().unwrap(), BodyHeight::Pixels(250));
    assert_eq!("".parse::<BodyHeight>().unwrap(), BodyHeight::Auto);
    assert_eq!("   ".parse::<BodyHeight>().unwrap(), BodyHeight::Auto);
    assert_eq!(
        "calc(100% - 20px)".parse::<BodyHeight>().unwrap(),
        BodyHeight::Css("calc(100% - 20px)".to_string())
    );
    assert!("99999999999999".parse::<BodyHeight>().is_err());
}

#[test]
fn test_body_height_display() {
    assert_eq!(BodyHeight::Auto.to_string(), "auto");
    assert_eq!(BodyHeight::Pixels(400).to_string(), "400px");
    assert_eq!(BodyHeight::Css("50vh".to_string()).to_string(), "50vh");
}

// ============================================================================
// Cells
// ============================================================================

#[test]
fn test_cell_and_header_renderers() {
    let columns: Vec<Column<Value>> = vec![
        Column::new("id").width(80),
        Column::new("name")
            .width(200)
            .header_renderer(|column, index| format!("{}#{}", column.data_key, index))
            .cell_renderer(|ctx| ctx.value.clone().unwrap_or_default().to_uppercase()),
    ];
    let view = Table::with_data(columns, rows(3)).render();
    assert_eq!(view.header.cells[0].title, "id");
    assert_eq!(view.header.cells[1].title, "name#1");

    let BodyView::Rows(rows) = view.body else {
        panic!("expected plain rows");
    };
    assert_eq!(rows[2].cells[0].content, CellContent::Text("2".to_string()));
    assert_eq!(rows[2].cells[1].content, CellContent::Text("USER 2".to_string()));
}

#[test]
fn test_missing_field_renders_empty() {
    let data = vec![json!({ "id": 1, "name": null })];
    let view = Table::with_data(fixed_columns(), data).render();
    let BodyView::Rows(rows) = view.body else {
        panic!("expected plain rows");
    };
    assert_eq!(rows[0].cells[1].content, CellContent::Text(String::new()));
}

#[test]
fn test_striped_rows() {
    let view = Table::with_data(fixed_columns(), rows(4))
        .with_stripe(true)
        .render();
    let BodyView::Rows(rows) = view.body else {
        panic!("expected plain rows");
    };
    let striped: Vec<bool> = rows.iter().map(|r| r.striped).collect();
    assert_eq!(striped, vec![false, true, false, true]);
}
