//! Core state container for the terminal application's front-end.
//!
//! The `app` module exposes the [`App`] struct which bundles together the
//! search session, the fetch worker handle, and UI-specific caches.

use anyhow::{Context, Result};
use hnsearch_core::{Item, SearchClient, Session, SortKey};
use throbber_widgets_tui::ThrobberState;

use super::FetchRuntime;
use super::results::ResultsState;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.fetch.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Draft query typed in the prompt.
	pub search_input: QueryInput<'a>,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) ui: UiLabels,
	pub(crate) session: Session,
	pub(crate) fetch: FetchRuntime,
	pub(crate) results: ResultsState,
	pub(crate) throbber_state: ThrobberState,
}

impl<'a> App<'a> {
	/// Start a session for `initial_query` and request its first page.
	pub fn new<C>(client: C, initial_query: impl Into<String>) -> Result<Self>
	where
		C: SearchClient + 'static,
	{
		let initial_query = initial_query.into();
		let fetch = FetchRuntime::spawn(client).context("failed to start the fetch worker")?;
		let (session, request) = Session::start(initial_query.clone());

		let mut app = Self {
			search_input: QueryInput::new(initial_query),
			style: StyleConfig::default(),
			ui: UiLabels::default(),
			session,
			fetch,
			results: ResultsState::default(),
			throbber_state: ThrobberState::default(),
		};
		app.dispatch(request);
		Ok(app)
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	#[must_use]
	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Make the draft the active query.
	pub(crate) fn submit_draft(&mut self) {
		let query = self.search_input.text().to_string();
		let request = self.session.submit_query(query);
		self.dispatch(request);
		self.results.reset(self.session.hit_count());
	}

	/// Ask for the next page of the active query.
	pub(crate) fn load_more(&mut self) {
		let request = self.session.request_next_page();
		self.dispatch(request);
	}

	pub(crate) fn dismiss_selected(&mut self) {
		let Some(item) = self.current_selection() else {
			return;
		};
		self.session.dismiss(&item.object_id);
		self.ensure_selection();
	}

	pub(crate) fn sort_by(&mut self, key: SortKey) {
		self.session.set_sort(key);
		self.results.reset(self.session.hit_count());
	}

	/// True while the error panel covers the results table.
	pub(crate) fn error_shown(&self) -> bool {
		self.session.last_error().is_some()
	}

	/// The story under the row cursor, in visible order. Nothing is selected
	/// while the error panel is up.
	pub(crate) fn current_selection(&self) -> Option<Item> {
		if self.error_shown() {
			return None;
		}
		let selected = self.results.table_state.selected()?;
		self.session.visible().get(selected).map(|item| (*item).clone())
	}

	/// Ensure the row selection remains valid for the visible list.
	pub(crate) fn ensure_selection(&mut self) {
		self.results.ensure_selection(self.session.hit_count());
	}
}
