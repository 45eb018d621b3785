//! Result store and view derivation for a search session.
//!
//! A [`Session`] owns every page received so far, keyed by query, together
//! with the active query, the global sort selection and the most recent
//! fetch error. It never performs I/O itself: operations that need a page
//! return a [`FetchRequest`] for the caller to dispatch, and the caller feeds
//! the outcome back through [`Session::receive_page`] or
//! [`Session::receive_error`].

mod sort;
mod store;
#[cfg(test)]
mod tests;

use log::{debug, warn};

pub use sort::{SortKey, SortState};
pub use store::{QueryResults, ResultsByQuery};

use crate::error::FetchError;
use crate::model::{Item, SearchResultPage};

/// A page fetch the session is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
	/// Monotonically increasing identifier, unique per session.
	pub id: u64,
	/// Query the response will be stored under.
	pub query: String,
	pub page: u32,
}

/// Explicit state container for one search session.
#[derive(Debug, Default)]
pub struct Session {
	active_query: String,
	results: ResultsByQuery,
	last_error: Option<FetchError>,
	sort: SortState,
	next_request_id: u64,
	in_flight: Vec<FetchRequest>,
}

impl Session {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a session with `query` already active and its first page requested.
	#[must_use]
	pub fn start(query: impl Into<String>) -> (Self, Option<FetchRequest>) {
		let mut session = Self::new();
		let request = session.submit_query(query);
		(session, request)
	}

	#[must_use]
	pub fn active_query(&self) -> &str {
		&self.active_query
	}

	#[must_use]
	pub fn results(&self) -> &ResultsByQuery {
		&self.results
	}

	/// Accumulated results for the active query, if any page arrived yet.
	#[must_use]
	pub fn active_results(&self) -> Option<&QueryResults> {
		self.results.get(&self.active_query)
	}

	#[must_use]
	pub fn last_error(&self) -> Option<&FetchError> {
		self.last_error.as_ref()
	}

	#[must_use]
	pub fn sort(&self) -> SortState {
		self.sort
	}

	/// True while any fetch is outstanding.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		!self.in_flight.is_empty()
	}

	#[must_use]
	pub fn in_flight(&self) -> &[FetchRequest] {
		&self.in_flight
	}

	fn has_request_for(&self, query: &str) -> bool {
		self.in_flight.iter().any(|request| request.query == query)
	}

	fn issue(&mut self, query: String, page: u32) -> FetchRequest {
		self.next_request_id = self.next_request_id.wrapping_add(1);
		let request = FetchRequest {
			id: self.next_request_id,
			query,
			page,
		};
		debug!(
			"issuing fetch #{} for {:?} page {}",
			request.id, request.query, request.page
		);
		self.in_flight.push(request.clone());
		request
	}

	fn retire(&mut self, request_id: u64) -> Option<FetchRequest> {
		let position = self
			.in_flight
			.iter()
			.position(|request| request.id == request_id)?;
		Some(self.in_flight.remove(position))
	}

	/// Make `query` active, returning a page-0 request when it was never fetched.
	///
	/// Cached queries are reused as-is, and a query that already has a fetch
	/// outstanding is not requested a second time.
	pub fn submit_query(&mut self, query: impl Into<String>) -> Option<FetchRequest> {
		let query = query.into();
		self.active_query.clone_from(&query);

		if self.results.contains(&query) || self.has_request_for(&query) {
			debug!("reusing cached results for {query:?}");
			return None;
		}

		Some(self.issue(query, 0))
	}

	/// Request the page after the last one received for the active query.
	///
	/// Returns `None` while a fetch for the active query is outstanding.
	pub fn request_next_page(&mut self) -> Option<FetchRequest> {
		if self.has_request_for(&self.active_query) {
			debug!("next page for {:?} already in flight", self.active_query);
			return None;
		}

		let page = self
			.active_results()
			.map_or(0, |results| results.page.saturating_add(1));
		Some(self.issue(self.active_query.clone(), page))
	}

	/// Store a received page under the query it was requested for.
	///
	/// Returns `false` when `request_id` is not outstanding; the page is
	/// dropped in that case.
	pub fn receive_page(&mut self, request_id: u64, page: SearchResultPage) -> bool {
		let Some(request) = self.retire(request_id) else {
			warn!("dropping page for unknown fetch #{request_id}");
			return false;
		};

		let received = page.hits.len();
		let entry = self.results.append(&request.query, page);
		debug!(
			"fetch #{} for {:?} appended {received} hits ({} total, page {})",
			request.id,
			request.query,
			entry.hits.len(),
			entry.page
		);
		self.last_error = None;
		true
	}

	/// Record a failed fetch. Accumulated results are left untouched.
	pub fn receive_error(&mut self, request_id: u64, error: FetchError) -> bool {
		let known = self.retire(request_id).is_some();
		if known {
			warn!("fetch #{request_id} failed: {error}");
		} else {
			warn!("fetch #{request_id} failed after it was retired: {error}");
		}
		self.last_error = Some(error);
		known
	}

	/// Remove the first hit of the active query with `object_id`.
	pub fn dismiss(&mut self, object_id: &str) -> bool {
		let Some(results) = self.results.get_mut(&self.active_query) else {
			return false;
		};
		let removed = results.remove_first(object_id).is_some();
		if removed {
			debug!("dismissed {object_id} from {:?}", self.active_query);
		}
		removed
	}

	pub fn set_sort(&mut self, key: SortKey) {
		self.sort.select(key);
		debug!("sort set to {} (reverse: {})", self.sort.key, self.sort.reverse);
	}

	/// The active query's hits with the sort selection applied.
	#[must_use]
	pub fn visible(&self) -> Vec<&Item> {
		match self.active_results() {
			Some(results) => self.sort.apply(&results.hits),
			None => Vec::new(),
		}
	}

	/// Number of hits accumulated for the active query.
	#[must_use]
	pub fn hit_count(&self) -> usize {
		self.active_results().map_or(0, |results| results.hits.len())
	}
}
