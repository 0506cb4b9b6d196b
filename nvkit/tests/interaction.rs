use nvkit::components::SelectAllState;
use nvkit::prelude::*;
use serde_json::{Value, json};

fn rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "id": i, "name": format!("user {}", i) }))
        .collect()
}

fn columns() -> Vec<Column<Value>> {
    vec![
        Column::new("id").width(80),
        Column::new("name").width(200).sortable(),
        Column::new("email").key("mail").width(200).sortable(),
    ]
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

// ============================================================================
// Multiple Selection
// ============================================================================

#[test]
fn test_toggle_proposes_without_mutating() {
    let mut table =
        Table::with_data(columns(), rows(5)).with_selection_mode(SelectionMode::Multiple);
    table.set_selected_keys(keys(&["1"]));

    assert_eq!(table.toggle_row(2), EventResult::Consumed);
    assert_eq!(
        table.drain_events(),
        vec![TableEvent::SelectionChanged {
            keys: keys(&["1", "2"]),
            rows: vec![1, 2],
        }]
    );
    assert_eq!(table.selected_keys(), keys(&["1"]).as_slice(), "caller owns the keys");

    table.toggle_row(1);
    assert_eq!(
        table.drain_events(),
        vec![TableEvent::SelectionChanged {
            keys: vec![],
            rows: vec![],
        }]
    );
}

#[test]
fn test_selected_rows_are_marked() {
    let mut table =
        Table::with_data(columns(), rows(3)).with_selection_mode(SelectionMode::Multiple);
    table.set_selected_keys(keys(&["0", "2"]));

    let BodyView::Rows(rows) = table.render().body else {
        panic!("expected plain rows");
    };
    let selected: Vec<bool> = rows.iter().map(|r| r.selected).collect();
    assert_eq!(selected, vec![true, false, true]);
    assert_eq!(
        rows[0].cells[0].content,
        CellContent::Selection {
            mode: SelectionMode::Multiple,
            checked: true,
        }
    );
}

#[test]
fn test_select_all_header_state() {
    let mut table =
        Table::with_data(columns(), rows(3)).with_selection_mode(SelectionMode::Multiple);
    let header_state = |table: &Table<Value>| table.render().header.cells[0].select_all;

    assert_eq!(header_state(&table), Some(SelectAllState::default()));

    table.set_selected_keys(keys(&["1"]));
    assert_eq!(
        header_state(&table),
        Some(SelectAllState {
            checked: false,
            indeterminate: true,
        })
    );

    table.set_selected_keys(keys(&["0", "1", "2"]));
    assert_eq!(
        header_state(&table),
        Some(SelectAllState {
            checked: true,
            indeterminate: false,
        })
    );
}

#[test]
fn test_select_all() {
    let mut table =
        Table::with_data(columns(), rows(3)).with_selection_mode(SelectionMode::Multiple);

    assert!(table.select_all(true).is_handled());
    assert!(table.select_all(false).is_handled());
    assert_eq!(
        table.drain_events(),
        vec![
            TableEvent::SelectionChanged {
                keys: keys(&["0", "1", "2"]),
                rows: vec![0, 1, 2],
            },
            TableEvent::SelectionChanged {
                keys: vec![],
                rows: vec![],
            },
        ]
    );
}

#[test]
fn test_select_all_needs_multiple_mode() {
    let mut table =
        Table::with_data(columns(), rows(3)).with_selection_mode(SelectionMode::Single);
    assert_eq!(table.select_all(true), EventResult::Ignored);
    assert!(table.render().header.cells[0].select_all.is_none());
}

// ============================================================================
// Single Selection and Row Clicks
// ============================================================================

#[test]
fn test_click_in_single_mode_selects_row() {
    let mut table =
        Table::with_data(columns(), rows(5)).with_selection_mode(SelectionMode::Single);

    assert!(table.click_row(3).is_handled());
    assert_eq!(
        table.drain_events(),
        vec![
            TableEvent::SelectionChanged {
                keys: keys(&["3"]),
                rows: vec![3],
            },
            TableEvent::RowClicked {
                index: 3,
                key: Some("3".to_string()),
            },
        ]
    );
}

#[test]
fn test_radio_toggle_replaces_selection() {
    let mut table =
        Table::with_data(columns(), rows(5)).with_selection_mode(SelectionMode::Single);
    table.set_selected_keys(keys(&["1"]));
    table.toggle_row(4);
    assert_eq!(
        table.drain_events(),
        vec![TableEvent::SelectionChanged {
            keys: keys(&["4"]),
            rows: vec![4],
        }]
    );
}

#[test]
fn test_click_without_selection_mode_only_reports_click() {
    let mut table = Table::with_data(columns(), rows(5));
    table.click_row(0);
    assert_eq!(
        table.drain_events(),
        vec![TableEvent::RowClicked {
            index: 0,
            key: Some("0".to_string()),
        }]
    );
    assert_eq!(table.toggle_row(0), EventResult::Ignored);
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let mut table = Table::with_data(columns(), rows(5));
    assert_eq!(table.click_row(5), EventResult::Ignored);
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_current_row_highlight() {
    let mut table = Table::with_data(columns(), rows(10)).with_highlight_current_row(true);

    table.click_row(3);
    table.click_row(3);
    table.click_row(5);
    let changes: Vec<TableEvent> = table
        .drain_events()
        .into_iter()
        .filter(|e| e.name() == "current-change")
        .collect();
    assert_eq!(
        changes,
        vec![
            TableEvent::CurrentRowChanged {
                current: 3,
                previous: None,
            },
            TableEvent::CurrentRowChanged {
                current: 5,
                previous: Some(3),
            },
        ]
    );
    assert_eq!(table.current_row(), Some(5));

    let BodyView::Rows(rows) = table.render().body else {
        panic!("expected plain rows");
    };
    let current: Vec<usize> = rows.iter().filter(|r| r.current).map(|r| r.index).collect();
    assert_eq!(current, vec![5]);
}

#[test]
fn test_current_row_follows_key_when_rows_move() {
    let mut table = Table::with_data(columns(), rows(10)).with_highlight_current_row(true);
    table.click_row(5);

    let mut reversed = rows(10);
    reversed.reverse();
    table.set_data(reversed);
    assert_eq!(table.current_row(), Some(4));
}

// ============================================================================
// Row Keys
// ============================================================================

#[test]
fn test_row_without_key_is_not_selectable() {
    let data = vec![json!({ "id": "a" }), json!({ "name": "anonymous" })];
    let mut table =
        Table::with_data(columns(), data).with_selection_mode(SelectionMode::Multiple);

    assert_eq!(table.toggle_row(1), EventResult::Ignored);
    assert!(table.drain_events().is_empty());

    table.select_all(true);
    assert_eq!(
        table.drain_events(),
        vec![TableEvent::SelectionChanged {
            keys: keys(&["a"]),
            rows: vec![0],
        }]
    );
}

#[test]
fn test_custom_row_key() {
    let mut table = Table::with_data(columns(), rows(3))
        .with_row_key(RowKey::func(|row: &Value| {
            format!("user-{}", row["id"])
        }))
        .with_selection_mode(SelectionMode::Multiple);
    table.toggle_row(2);
    assert_eq!(
        table.drain_events(),
        vec![TableEvent::SelectionChanged {
            keys: keys(&["user-2"]),
            rows: vec![2],
        }]
    );

    let mut by_field = Table::with_data(columns(), rows(3))
        .with_row_key(RowKey::field("name"))
        .with_selection_mode(SelectionMode::Single);
    by_field.click_row(1);
    assert_eq!(
        by_field.drain_events()[0],
        TableEvent::SelectionChanged {
            keys: keys(&["user 1"]),
            rows: vec![1],
        }
    );
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_cycle() {
    let mut table = Table::with_data(columns(), rows(3));

    for expected in [
        Some(SortOrder::Ascending),
        Some(SortOrder::Descending),
        None,
        Some(SortOrder::Ascending),
    ] {
        assert!(table.click_header("name").is_handled());
        assert_eq!(table.sort().map(|s| s.order), expected);
        assert_eq!(
            table.drain_events(),
            vec![TableEvent::SortChanged {
                column_key: "name".to_string(),
                order: expected,
            }]
        );
    }
}

#[test]
fn test_sorting_another_column_starts_ascending() {
    let mut table = Table::with_data(columns(), rows(3));
    table.click_header("name");
    table.click_header("name");
    table.click_header("mail");

    let sort = table.sort().cloned();
    assert_eq!(
        sort,
        Some(SortState {
            column_key: "mail".to_string(),
            order: SortOrder::Ascending,
        })
    );

    let header = table.render().header;
    let orders: Vec<Option<SortOrder>> = header.cells.iter().map(|c| c.sort).collect();
    assert_eq!(orders, vec![None, None, Some(SortOrder::Ascending)]);
}

#[test]
fn test_unsortable_or_unknown_column_is_ignored() {
    let mut table = Table::with_data(columns(), rows(3));
    assert_eq!(table.click_header("id"), EventResult::Ignored);
    assert_eq!(table.click_header("email"), EventResult::Ignored, "keyed as mail");
    assert_eq!(table.click_header("missing"), EventResult::Ignored);
    assert!(table.sort().is_none());
    assert!(table.drain_events().is_empty());
}

#[test]
fn test_sort_indicator() {
    use nvkit::components::table::sort_indicator;

    assert_eq!(sort_indicator(Some(SortOrder::Ascending)), "↑");
    assert_eq!(sort_indicator(Some(SortOrder::Descending)), "↓");
    assert_eq!(sort_indicator(None), "⇅");
}

#[test]
fn test_event_names() {
    let names: Vec<&str> = [
        TableEvent::SelectionChanged {
            keys: vec![],
            rows: vec![],
        },
        TableEvent::RowClicked { index: 0, key: None },
        TableEvent::CurrentRowChanged {
            current: 0,
            previous: None,
        },
        TableEvent::SortChanged {
            column_key: String::new(),
            order: None,
        },
    ]
    .iter()
    .map(TableEvent::name)
    .collect();
    assert_eq!(names, vec!["selection-change", "row-click", "current-change", "sort"]);
}
