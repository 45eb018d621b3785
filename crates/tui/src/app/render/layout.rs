use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::HighlightSpacing;
use unicode_width::UnicodeWidthStr;

use crate::components::tables::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, TABLE_HIGHLIGHT_SPACING};

fn highlight_width(has_selection: bool) -> u16 {
	match TABLE_HIGHLIGHT_SPACING {
		HighlightSpacing::Always => HIGHLIGHT_SYMBOL.width() as u16,
		HighlightSpacing::WhenSelected if has_selection => HIGHLIGHT_SYMBOL.width() as u16,
		HighlightSpacing::WhenSelected | HighlightSpacing::Never => 0,
	}
}

/// Widths the table will give each column inside the bordered `area`.
pub(crate) fn resolve_column_widths(
	area: Rect,
	widths: &[Constraint],
	has_selection: bool,
) -> Vec<u16> {
	if widths.is_empty() || area.width == 0 {
		return Vec::new();
	}

	let table_width = area.width.saturating_sub(2);
	if table_width == 0 {
		return Vec::new();
	}

	let [_selection, columns_area] = Layout::horizontal([
		Constraint::Length(highlight_width(has_selection)),
		Constraint::Fill(0),
	])
	.areas(Rect::new(0, 0, table_width, 1));

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}

/// Index of the column drawn at screen column `x` of the bordered `area`.
pub(crate) fn column_at(area: Rect, column_widths: &[u16], has_selection: bool, x: u16) -> Option<usize> {
	let mut start = area
		.x
		.saturating_add(1)
		.saturating_add(highlight_width(has_selection));
	if x < start {
		return None;
	}
	for (index, &width) in column_widths.iter().enumerate() {
		let end = start.saturating_add(width);
		if x < end {
			return Some(index);
		}
		start = end.saturating_add(TABLE_COLUMN_SPACING);
		if x < start {
			return None;
		}
	}
	None
}
