//! Search client for the Hacker News Algolia API.

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::FetchError;
use crate::model::SearchResultPage;

/// Endpoint root used unless configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1";
/// Query that is active when the application starts.
pub const DEFAULT_QUERY: &str = "redux";
/// Page size requested from the endpoint.
pub const HITS_PER_PAGE: u32 = 100;

const SEARCH_PATH: &str = "search";
const PARAM_QUERY: &str = "query";
const PARAM_PAGE: &str = "page";
const PARAM_HPP: &str = "hitsPerPage";

/// Capability to retrieve one page of hits for a query.
pub trait SearchClient: Send {
	fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError>;
}

/// [`SearchClient`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	http: Client,
	base_url: String,
}

impl HttpSearchClient {
	/// Create a client targeting [`DEFAULT_BASE_URL`].
	#[must_use]
	pub fn new() -> Self {
		Self::with_base_url(DEFAULT_BASE_URL)
	}

	/// Create a client targeting a different endpoint root.
	#[must_use]
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self {
			http: Client::new(),
			base_url: base_url.into(),
		}
	}

	/// Build the request URL for a query and page.
	pub fn search_url(&self, query: &str, page: u32) -> Result<Url, FetchError> {
		search_url(&self.base_url, query, page)
	}
}

impl Default for HttpSearchClient {
	fn default() -> Self {
		Self::new()
	}
}

impl SearchClient for HttpSearchClient {
	fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResultPage, FetchError> {
		let url = self.search_url(query, page)?;
		debug!("GET {url}");

		let response = self.http.get(url).send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				status: status.as_u16(),
			});
		}

		let body = response.text()?;
		Ok(serde_json::from_str(&body)?)
	}
}

/// Compose `{base}/search?query=..&page=..&hitsPerPage=..` with proper
/// percent-encoding of the query.
pub fn search_url(base_url: &str, query: &str, page: u32) -> Result<Url, FetchError> {
	let root = format!("{}/{SEARCH_PATH}", base_url.trim_end_matches('/'));
	let page = page.to_string();
	let hits_per_page = HITS_PER_PAGE.to_string();
	let url = Url::parse_with_params(
		&root,
		[
			(PARAM_QUERY, query),
			(PARAM_PAGE, page.as_str()),
			(PARAM_HPP, hits_per_page.as_str()),
		],
	)?;
	Ok(url)
}
