use thiserror::Error;

/// Failure to retrieve a page of search results.
///
/// The variants only differ in the message they carry; callers treat every
/// variant the same way.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The request could not be built or sent, or the connection failed.
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The endpoint answered with a non-2xx status.
	#[error("search endpoint returned HTTP {status}")]
	Status { status: u16 },

	/// The response body was not a search result page.
	#[error("unexpected response body: {0}")]
	Decode(#[from] serde_json::Error),

	/// The configured endpoint could not be turned into a request URL.
	#[error("invalid search endpoint: {0}")]
	Endpoint(#[from] url::ParseError),

	/// Anything raised by a non-HTTP client.
	#[error("{0}")]
	Other(String),
}

impl FetchError {
	pub fn other(message: impl Into<String>) -> Self {
		Self::Other(message.into())
	}
}
