use hnsearch_core::SortKey;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::render::COLUMNS;
use super::render::layout::column_at;
use crate::SearchOutcome;
use crate::components::point_in_rect;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Char('o') if ctrl => {
				if self.current_selection().is_some() {
					return Some(self.outcome(true));
				}
			}
			KeyCode::Enter => self.submit_draft(),
			KeyCode::Char('n') if ctrl => self.load_more(),
			KeyCode::Char('d') if ctrl => self.dismiss_selected(),
			KeyCode::Delete => self.dismiss_selected(),
			KeyCode::F(n @ 1..=5) => self.sort_by(SortKey::ALL[usize::from(n - 1)]),
			KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown
				if self.error_shown() => {}
			KeyCode::Up => self.results.move_by(-1),
			KeyCode::Down => self.results.move_by(1),
			KeyCode::PageUp => {
				let rows = self.results.page_rows() as isize;
				self.results.move_by(-rows);
			}
			KeyCode::PageDown => {
				let rows = self.results.page_rows() as isize;
				self.results.move_by(rows);
			}
			_ => {
				self.search_input.input(key);
			}
		}
		None
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollUp if self.over_results(mouse) => self.results.move_by(-1),
			MouseEventKind::ScrollDown if self.over_results(mouse) => self.results.move_by(1),
			MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
			_ => {}
		}
	}

	fn click(&mut self, column: u16, row: u16) {
		if self
			.results
			.more_area
			.is_some_and(|area| point_in_rect(column, row, area))
		{
			self.load_more();
			return;
		}

		let Some(area) = self.results.area else {
			return;
		};
		if !point_in_rect(column, row, area) {
			return;
		}

		if self.results.is_header_row(row) {
			let has_selection = self.results.table_state.selected().is_some();
			if let Some(index) = column_at(area, &self.results.column_widths, has_selection, column)
				&& let Some((_, key)) = COLUMNS.get(index)
			{
				self.sort_by(*key);
			}
			return;
		}

		if let Some(index) = self.results.body_row_at(row) {
			self.results.table_state.select(Some(index));
		}
	}

	fn over_results(&self, mouse: MouseEvent) -> bool {
		self.results
			.area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area))
	}

	fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			selection: if accepted { self.current_selection() } else { None },
			query: self.session.active_query().to_string(),
		}
	}
}
