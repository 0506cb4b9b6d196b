//! Column width resolution for flexible (width-less) columns.
//!
//! A column with an explicit width keeps it. Every column without one shares
//! whatever container width the fixed columns leave over, in equal integer
//! parts. The functions here only see widths, so any column descriptor type
//! can feed them.

/// Container width assumed before the first layout pass has measured it.
pub const PLACEHOLDER_WIDTH: u32 = 800;

/// The measured container width, or `placeholder` if nothing was measured yet.
///
/// A measurement of zero means the node has not been laid out.
pub fn effective_container_width(measured: Option<u32>, placeholder: u32) -> u32 {
    match measured {
        Some(width) if width > 0 => width,
        _ => placeholder,
    }
}

/// Whether any column lacks an explicit width.
pub fn has_flexible(widths: &[Option<u32>]) -> bool {
    widths.iter().any(Option::is_none)
}

/// Sum of all explicit widths.
pub fn fixed_total(widths: &[Option<u32>]) -> u32 {
    widths
        .iter()
        .flatten()
        .fold(0u32, |sum, width| sum.saturating_add(*width))
}

/// Width each flexible column receives, or 0 if there are none.
pub fn flex_width(widths: &[Option<u32>], container_width: u32) -> u32 {
    let flex_count = widths.iter().filter(|w| w.is_none()).count() as u32;
    if flex_count == 0 {
        return 0;
    }
    container_width.saturating_sub(fixed_total(widths)) / flex_count
}

/// Concrete pixel width for every column, in input order.
pub fn resolve_widths(widths: &[Option<u32>], container_width: u32) -> Vec<u32> {
    let flex = flex_width(widths, container_width);
    widths.iter().map(|w| w.unwrap_or(flex)).collect()
}
