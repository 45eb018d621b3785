//! State management for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::tables::TABLE_HEADER_ROWS;

/// Aggregate state for the results table and its interactions.
pub(crate) struct ResultsState {
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	/// Last known table area on screen, borders included.
	pub area: Option<Rect>,
	/// Resolved widths of the table columns at the last render.
	pub column_widths: Vec<u16>,
	/// Clickable area of the load-more control, if rendered.
	pub more_area: Option<Rect>,
	/// Number of rows at the last render.
	pub len: usize,
}

impl Default for ResultsState {
	fn default() -> Self {
		let mut table_state = TableState::default();
		table_state.select(Some(0));
		Self {
			table_state,
			scrollbar_state: ScrollbarState::default(),
			area: None,
			column_widths: Vec::new(),
			more_area: None,
			len: 0,
		}
	}
}

impl ResultsState {
	/// Keep the selection within `len` rows.
	pub fn ensure_selection(&mut self, len: usize) {
		self.len = len;
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Jump back to the first row.
	pub fn reset(&mut self, len: usize) {
		*self.table_state.offset_mut() = 0;
		self.table_state.select(Some(0));
		self.ensure_selection(len);
	}

	pub fn move_by(&mut self, delta: isize) {
		if self.len == 0 {
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(self.len - 1);
		self.table_state.select(Some(next));
	}

	/// Rows that fit in the body of the table.
	pub fn page_rows(&self) -> usize {
		self.area
			.map(|area| (area.height.saturating_sub(2) as usize).saturating_sub(TABLE_HEADER_ROWS))
			.unwrap_or(1)
			.max(1)
	}

	/// Row of the table body under `row`, if any.
	pub fn body_row_at(&self, row: u16) -> Option<usize> {
		let area = self.area?;
		// Rows start below the top border, the header and the separator.
		let body_start_y = area.y.saturating_add(1 + TABLE_HEADER_ROWS as u16);
		let body_end_y = area.y.saturating_add(area.height.saturating_sub(1));
		if row < body_start_y || row >= body_end_y {
			return None;
		}
		let index = self
			.table_state
			.offset()
			.saturating_add(usize::from(row - body_start_y));
		(index < self.len).then_some(index)
	}

	/// Whether `row` is the header row of the table.
	pub fn is_header_row(&self, row: u16) -> bool {
		self.area.is_some_and(|area| row == area.y.saturating_add(1))
	}

	/// Sync the scrollbar with the current offset for a body of `viewport_rows`.
	pub fn update_scrollbar(&mut self, viewport_rows: usize) {
		if self.len <= viewport_rows || viewport_rows == 0 {
			self.scrollbar_state = ScrollbarState::default();
			return;
		}
		let max_offset = self.len - viewport_rows;
		let offset = self.table_state.offset().min(max_offset);
		let position = offset.saturating_mul(self.len - 1) / max_offset;
		self.scrollbar_state = self
			.scrollbar_state
			.content_length(self.len)
			.viewport_content_length(viewport_rows)
			.position(position);
	}
}
