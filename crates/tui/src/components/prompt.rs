use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The query input widget.
	pub search_input: &'a QueryInput<'a>,
	/// Label rendered before the prompt.
	pub label: &'a str,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Status information shown at the right of the prompt.
pub struct ProgressState<'a> {
	/// Text describing the session state.
	pub status_text: &'a str,
	/// Whether any fetch is outstanding.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the input row with label, placeholder and status.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		label,
		placeholder,
		area,
		theme,
	} = input;

	let prefix = format!("{label} ❯ ");
	let [label_area, input_area] = Layout::horizontal([
		Constraint::Length(prefix.width() as u16),
		Constraint::Fill(1),
	])
	.areas(area);
	frame.render_widget(Line::styled(prefix, theme.prompt_style()), label_area);

	search_input.render_textarea(frame, input_area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, input_area, placeholder_text, theme);
	}

	render_progress(frame, input_area, progress, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		status_text,
		loading,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || status_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if loading {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(status_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep clear of whatever the user has typed.
	let input_row = area.top();
	let last_char_x = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, input_row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
