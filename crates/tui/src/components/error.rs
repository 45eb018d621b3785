use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::style::Theme;

/// Render the failure panel that replaces the results table.
pub fn render_error(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.error_style())
		.title(Line::styled(title.to_string(), theme.error_style()));

	let text = Text::from(vec![
		Line::from(message.to_string()),
		Line::default(),
		Line::styled("Press Ctrl-N or Enter to try again.", theme.empty_style()),
	]);
	let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}
