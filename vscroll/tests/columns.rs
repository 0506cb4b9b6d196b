use vscroll::column::{fixed_total, flex_width, has_flexible};
use vscroll::{effective_container_width, resolve_widths, PLACEHOLDER_WIDTH};

// ============================================================================
// Flexible Distribution
// ============================================================================

#[test]
fn test_one_fixed_two_flexible() {
    let widths = [Some(120), None, None];
    assert_eq!(fixed_total(&widths), 120);
    assert_eq!(flex_width(&widths, 600), 240);
    assert_eq!(resolve_widths(&widths, 600), vec![120, 240, 240]);
}

#[test]
fn test_flex_width_floors_remainder() {
    let widths = [Some(100), None, None, None];
    // (500 - 100) / 3 = 133.33
    assert_eq!(resolve_widths(&widths, 500), vec![100, 133, 133, 133]);
}

#[test]
fn test_fixed_columns_exceeding_container_give_zero_flex() {
    let widths = [Some(500), Some(400), None];
    assert_eq!(resolve_widths(&widths, 600), vec![500, 400, 0]);
}

#[test]
fn test_no_flexible_columns_no_redistribution() {
    let widths = [Some(100), Some(200)];
    assert!(!has_flexible(&widths));
    assert_eq!(flex_width(&widths, 1000), 0);
    assert_eq!(resolve_widths(&widths, 1000), vec![100, 200]);
}

#[test]
fn test_all_flexible() {
    let widths = [None, None, None, None];
    assert!(has_flexible(&widths));
    assert_eq!(resolve_widths(&widths, 800), vec![200; 4]);
}

#[test]
fn test_empty_column_list() {
    assert!(resolve_widths(&[], 800).is_empty());
}

// ============================================================================
// Placeholder Width
// ============================================================================

#[test]
fn test_unmeasured_container_uses_placeholder() {
    assert_eq!(effective_container_width(None, PLACEHOLDER_WIDTH), 800);
    assert_eq!(effective_container_width(Some(0), PLACEHOLDER_WIDTH), 800, "zero means not laid out");
    assert_eq!(effective_container_width(Some(640), PLACEHOLDER_WIDTH), 640);
    assert_eq!(effective_container_width(None, 1024), 1024);
}

#[test]
fn test_placeholder_feeds_resolver() {
    let widths = [Some(200), None];
    let container = effective_container_width(None, PLACEHOLDER_WIDTH);
    assert_eq!(resolve_widths(&widths, container), vec![200, 600]);
}
