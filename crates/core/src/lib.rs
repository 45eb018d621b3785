//! Core state and I/O for the `hnsearch` terminal interface.
//!
//! The crate is split into the search client that talks to the Hacker News
//! Algolia endpoint, the background fetch worker that drives it, and the
//! session that accumulates results per query and derives the visible list.

pub mod client;
pub mod error;
pub mod fetch;
pub mod model;
pub mod session;

pub use crate::client::{
	DEFAULT_BASE_URL, DEFAULT_QUERY, HITS_PER_PAGE, HttpSearchClient, SearchClient,
};
pub use crate::error::FetchError;
pub use crate::model::{Item, SearchResultPage};
pub use crate::session::{FetchRequest, QueryResults, Session, SortKey, SortState};
