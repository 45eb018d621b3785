use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Argument bundle for rendering the footer row.
pub struct FooterContext<'a> {
	/// Label of the load-more control.
	pub more_label: &'a str,
	/// Key hints shown on the right.
	pub hints: &'a str,
	/// Whether any fetch is outstanding.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the footer and return the clickable area of the load-more control.
///
/// While loading, a spinner replaces the control and nothing is clickable.
pub fn render_footer(frame: &mut Frame, area: Rect, ctx: FooterContext<'_>) -> Option<Rect> {
	if area.width == 0 || area.height == 0 {
		return None;
	}

	let FooterContext {
		more_label,
		hints,
		loading,
		throbber_state,
		theme,
	} = ctx;

	let (control, button) = if loading {
		let spinner = Throbber::default()
			.style(theme.empty_style())
			.throbber_style(theme.header_style());
		let line = Line::from(vec![
			spinner.to_symbol_span(throbber_state),
			Span::styled("Loading…", theme.empty_style()),
		]);
		(line, None)
	} else {
		let label = format!("[ {more_label} ]");
		let width = (label.width() as u16).min(area.width);
		let button = Rect {
			width,
			height: 1,
			..area
		};
		(Line::from(Span::styled(label, theme.header_style())), Some(button))
	};

	let buffer = frame.buffer_mut();
	buffer.set_line(area.left(), area.top(), &control, area.width);

	let hints_width = hints.width() as u16;
	let control_width = control.width() as u16;
	if hints_width > 0 && control_width.saturating_add(hints_width).saturating_add(2) <= area.width {
		let x = area.right().saturating_sub(hints_width);
		buffer.set_line(
			x,
			area.top(),
			&Line::from(Span::styled(hints.to_string(), theme.empty_style())),
			hints_width,
		);
	}

	button
}
