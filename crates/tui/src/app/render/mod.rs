pub(crate) mod layout;

use hnsearch_core::{SortKey, SortState};
use layout::resolve_column_widths;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	FooterContext, InputContext, ProgressState, TableSpec, build_story_rows, render_error,
	render_footer, render_input, render_table,
};

const KEY_HINTS: &str = "Enter search · ^N more · ^D dismiss · F1-F5 sort · ^O open · Esc quit";

/// Table columns in display order, with the key each one sorts by.
pub(crate) const COLUMNS: [(&str, SortKey); 4] = [
	("Title", SortKey::Title),
	("Author", SortKey::Author),
	("Comments", SortKey::Comments),
	("Points", SortKey::Points),
];

fn column_constraints() -> Vec<Constraint> {
	vec![
		Constraint::Fill(1),
		Constraint::Length(16),
		Constraint::Length(10),
		Constraint::Length(8),
	]
}

/// Header label with an arrow pointing the way the column is ordered.
pub(crate) fn header_label(label: &str, key: SortKey, sort: SortState) -> String {
	if sort.key != key || key == SortKey::None {
		return label.to_string();
	}
	let ascending = matches!(key, SortKey::Title | SortKey::Author) != sort.reverse;
	let arrow = if ascending { '▲' } else { '▼' };
	format!("{label} {arrow}")
}

impl App<'_> {
	/// Render the whole interface into `frame`.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [prompt_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		let status = self.status_text();
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				label: &self.ui.input_title,
				placeholder: Some(&self.ui.placeholder),
				area: prompt_area,
				theme: &self.style.theme,
			},
			ProgressState {
				status_text: &status,
				loading: self.session.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);

		if let Some(error) = self.session.last_error() {
			self.results.area = None;
			render_error(
				frame,
				body_area,
				&self.ui.error_title,
				&error.to_string(),
				&self.style.theme,
			);
		} else {
			self.render_results(frame, body_area);
		}

		self.results.more_area = render_footer(
			frame,
			footer_area,
			FooterContext {
				more_label: &self.ui.more_label,
				hints: KEY_HINTS,
				loading: self.session.is_loading(),
				throbber_state: &self.throbber_state,
				theme: &self.style.theme,
			},
		);
	}

	fn status_text(&self) -> String {
		match self.session.active_results() {
			Some(results) => format!("{} hits · page {}", results.hits.len(), results.page),
			None if self.session.is_loading() => "searching".to_string(),
			None => "0 hits".to_string(),
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		self.ensure_selection();
		self.results.area = Some(area);

		let viewport_rows = self.results.page_rows();
		let selected = self.results.table_state.selected().unwrap_or(0);
		let offset = self.results.table_state.offset();
		// Scroll so the selection stays on screen, the same way the table will.
		if selected < offset {
			*self.results.table_state.offset_mut() = selected;
		} else if selected >= offset + viewport_rows {
			*self.results.table_state.offset_mut() = selected + 1 - viewport_rows;
		}
		self.results.update_scrollbar(viewport_rows);

		let widths = column_constraints();
		let has_selection = self.results.table_state.selected().is_some();
		let column_widths = resolve_column_widths(area, &widths, has_selection);

		let sort = self.session.sort();
		let headers = COLUMNS
			.iter()
			.map(|(label, key)| header_label(label, *key, sort))
			.collect();

		let visible = self.session.visible();
		let empty = visible.is_empty();
		let rows = build_story_rows(
			&visible,
			self.session.active_query(),
			self.style.theme.highlight_style(),
			Some(&column_widths),
		);
		self.results.column_widths = column_widths;

		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			TableSpec {
				headers,
				widths,
				rows,
				title: Some(self.ui.table_title.clone()),
			},
			&self.style.theme,
		);

		if empty {
			self.render_empty_message(frame, area);
		}
	}

	fn render_empty_message(&self, frame: &mut Frame, area: Rect) {
		// Border (2) plus header and separator (2).
		const CHROME_HEIGHT: u16 = 4;
		if area.height <= CHROME_HEIGHT {
			return;
		}
		let message_area = Rect {
			x: area.x + 1,
			y: area.y + 3,
			width: area.width.saturating_sub(2),
			height: area.height - CHROME_HEIGHT,
		};
		let message = if self.session.active_results().is_none() && self.session.is_loading() {
			"Searching…"
		} else {
			self.ui.empty_message.as_str()
		};
		let empty = Paragraph::new(message)
			.alignment(Alignment::Center)
			.style(self.style.theme.empty_style());
		frame.render_widget(empty, message_area);
	}
}
