use std::thread;
use std::time::{Duration, Instant};

use hnsearch_core::{FetchError, Item, SearchClient, SearchResultPage, SortKey};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 14;

/// Serves two stories per page; the query `fail` always errors.
struct FakeClient;

impl SearchClient for FakeClient {
	fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError> {
		if query == "fail" || (query == "flaky" && page > 0) {
			return Err(FetchError::Status { status: 500 });
		}
		let hits = (0..2u64)
			.map(|i| {
				let mut item = Item::new(
					format!("{query}-{page}-{i}"),
					format!("{query} story {page}.{i}"),
				);
				item.author = format!("author{i}");
				item.num_comments = i;
				item.points = i * 10 + u64::from(page);
				item
			})
			.collect();
		Ok(SearchResultPage { hits, page })
	}
}

fn settle(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while app.session().is_loading() && Instant::now() < deadline {
		app.pump_fetch_results();
		thread::sleep(Duration::from_millis(1));
	}
	assert!(!app.session().is_loading(), "fetch did not complete in time");
}

fn screen(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let buffer = terminal.backend().buffer();
	let mut out = String::new();
	for y in 0..buffer.area.height {
		for x in 0..buffer.area.width {
			out.push_str(buffer[(x, y)].symbol());
		}
		out.push('\n');
	}
	out
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn visible_ids(app: &App<'_>) -> Vec<String> {
	app.session()
		.visible()
		.into_iter()
		.map(|item| item.object_id.clone())
		.collect()
}

#[test]
fn initial_query_is_fetched_and_rendered() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	assert!(screen(&mut app).contains("Searching…"));

	settle(&mut app);
	assert_eq!(visible_ids(&app), ["redux-0-0", "redux-0-1"]);

	let text = screen(&mut app);
	assert!(text.contains("redux story 0.1"));
	assert!(text.contains("2 hits · page 0"));
	assert!(text.contains("More history"));
	assert!(text.contains("Title"));
}

#[test]
fn typing_only_changes_the_draft_until_enter() {
	let mut app = App::new(FakeClient, "").expect("app");
	settle(&mut app);

	for ch in "rust".chars() {
		app.handle_key(key(KeyCode::Char(ch)));
	}
	assert_eq!(app.search_input.text(), "rust");
	assert_eq!(app.session().active_query(), "");
	assert!(!app.session().is_loading());

	app.handle_key(key(KeyCode::Enter));
	assert_eq!(app.session().active_query(), "rust");
	settle(&mut app);
	assert_eq!(visible_ids(&app), ["rust-0-0", "rust-0-1"]);
}

#[test]
fn ctrl_n_appends_the_next_page() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);

	app.handle_key(ctrl('n'));
	settle(&mut app);

	assert_eq!(
		visible_ids(&app),
		["redux-0-0", "redux-0-1", "redux-1-0", "redux-1-1"]
	);
	assert!(screen(&mut app).contains("4 hits · page 1"));
}

#[test]
fn dismiss_removes_the_selected_row() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);

	app.handle_key(key(KeyCode::Down));
	app.handle_key(ctrl('d'));
	assert_eq!(visible_ids(&app), ["redux-0-0"]);

	app.handle_key(key(KeyCode::Delete));
	assert!(visible_ids(&app).is_empty());
	assert!(screen(&mut app).contains("No results"));
}

#[test]
fn function_keys_sort_and_toggle() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);

	app.handle_key(key(KeyCode::F(5)));
	assert_eq!(app.session().sort().key, SortKey::Points);
	assert_eq!(visible_ids(&app), ["redux-0-1", "redux-0-0"]);
	assert!(screen(&mut app).contains("Points ▼"));

	app.handle_key(key(KeyCode::F(5)));
	assert_eq!(visible_ids(&app), ["redux-0-0", "redux-0-1"]);
	assert!(screen(&mut app).contains("Points ▲"));

	app.handle_key(key(KeyCode::F(1)));
	assert_eq!(app.session().sort().key, SortKey::None);
}

#[test]
fn clicking_a_header_sorts_by_that_column() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);
	screen(&mut app);

	// Prompt on row 0, top border on row 1, header on row 2. The title column
	// starts after the margin, the border and the selection symbol.
	app.handle_mouse(click(6, 2));
	assert_eq!(app.session().sort().key, SortKey::Title);
	assert!(screen(&mut app).contains("Title ▲"));
}

#[test]
fn clicking_a_row_selects_it() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);
	screen(&mut app);

	// Body rows start below the header separator on row 3.
	app.handle_mouse(click(10, 5));
	let outcome = app.handle_key(ctrl('o')).expect("accepted");
	assert_eq!(
		outcome.selection.map(|item| item.object_id),
		Some("redux-0-1".to_string())
	);
}

#[test]
fn clicking_more_history_requests_the_next_page() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);
	screen(&mut app);

	app.handle_mouse(click(3, HEIGHT - 1));
	assert!(app.session().is_loading());
	settle(&mut app);
	assert_eq!(app.session().hit_count(), 4);
}

#[test]
fn error_panel_replaces_the_table() {
	let mut app = App::new(FakeClient, "fail").expect("app");
	settle(&mut app);

	let text = screen(&mut app);
	assert!(text.contains("Something went wrong"));
	assert!(text.contains("HTTP 500"));
	assert!(!text.contains("Author"));

	app.search_input.set_text("redux");
	app.handle_key(key(KeyCode::Enter));
	settle(&mut app);
	let text = screen(&mut app);
	assert!(!text.contains("Something went wrong"));
	assert!(text.contains("redux story 0.0"));
}

#[test]
fn failed_next_page_hides_rows_from_key_actions() {
	let mut app = App::new(FakeClient, "flaky").expect("app");
	settle(&mut app);
	let text = screen(&mut app);
	assert!(text.contains("flaky story 0.0"));
	assert!(text.contains("flaky story 0.1"));

	app.handle_key(ctrl('n'));
	settle(&mut app);
	let text = screen(&mut app);
	assert!(text.contains("Something went wrong"));
	assert!(!text.contains("flaky story"));

	let selected = app.results.table_state.selected();
	app.handle_key(key(KeyCode::Down));
	app.handle_key(key(KeyCode::PageDown));
	assert_eq!(app.results.table_state.selected(), selected);

	app.handle_key(ctrl('d'));
	app.handle_key(key(KeyCode::Delete));
	assert_eq!(visible_ids(&app), ["flaky-0-0", "flaky-0-1"]);
	assert!(app.handle_key(ctrl('o')).is_none());
}

#[test]
fn escape_exits_without_a_selection() {
	let mut app = App::new(FakeClient, "redux").expect("app");
	settle(&mut app);

	let outcome = app.handle_key(key(KeyCode::Esc)).expect("outcome");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
	assert_eq!(outcome.query, "redux");
}

#[test]
fn accept_requires_a_selection() {
	let mut app = App::new(FakeClient, "fail").expect("app");
	settle(&mut app);
	assert!(app.handle_key(ctrl('o')).is_none());
}
