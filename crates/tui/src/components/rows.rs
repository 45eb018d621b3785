use std::mem;

use hnsearch_core::Item;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Build table rows for the visible stories.
///
/// Titles are truncated to the first column width and every occurrence of a
/// query term is styled with `highlight_style`.
#[must_use]
pub fn build_story_rows<'a>(
	items: &[&'a Item],
	query: &str,
	highlight_style: Style,
	column_widths: Option<&[u16]>,
) -> Vec<Row<'a>> {
	// Leave one column of slack so we don't rely on the table drawing right up to the edge.
	let title_width = column_widths
		.and_then(|widths| widths.first().copied())
		.map(|w| usize::from(w.saturating_sub(1)));

	items
		.iter()
		.map(|item| {
			let indices = match_indices(query, &item.title);
			Row::new([
				highlight_cell(&item.title, indices, title_width, highlight_style),
				Cell::from(item.author.as_str()),
				Cell::from(item.num_comments.to_string()),
				Cell::from(item.points.to_string()),
			])
		})
		.collect()
}

/// Character positions in `text` covered by any whitespace-separated term of
/// `query`, compared case-insensitively.
pub(crate) fn match_indices(query: &str, text: &str) -> Vec<usize> {
	let haystack: Vec<char> = text.chars().map(fold_case).collect();
	let mut indices = Vec::new();

	for term in query.split_whitespace() {
		let needle: Vec<char> = term.chars().map(fold_case).collect();
		if needle.is_empty() || needle.len() > haystack.len() {
			continue;
		}
		for start in 0..=haystack.len() - needle.len() {
			if haystack[start..start + needle.len()] == needle[..] {
				indices.extend(start..start + needle.len());
			}
		}
	}

	indices.sort_unstable();
	indices.dedup();
	indices
}

fn fold_case(ch: char) -> char {
	ch.to_lowercase().next().unwrap_or(ch)
}

fn highlight_cell(
	text: &str,
	indices: Vec<usize>,
	max_width: Option<usize>,
	highlight_style: Style,
) -> Cell<'static> {
	let (display_text, indices) = match max_width {
		Some(width) => truncate_with_highlight(text, indices, width),
		None => (text.to_string(), indices),
	};

	if indices.is_empty() {
		return Cell::from(display_text);
	}

	let mut next = indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();
	let style_for = |highlighted: bool| {
		if highlighted {
			highlight_style
		} else {
			Style::default()
		}
	};

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(Span::styled(mem::take(&mut buffer), style_for(highlighted)));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}
	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, style_for(highlighted)));
	}

	Cell::from(Line::from(spans))
}

fn truncate_with_highlight(
	text: &str,
	indices: Vec<usize>,
	max_width: usize,
) -> (String, Vec<usize>) {
	if max_width == 0 {
		return (String::new(), Vec::new());
	}
	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_string(), Vec::new());
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let limit = slice.chars().count();
	let mut truncated = slice.to_string();
	truncated.push_str(ELLIPSIS);
	let indices = indices.into_iter().filter(|&idx| idx < limit).collect();
	(truncated, indices)
}
