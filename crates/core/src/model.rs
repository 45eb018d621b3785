//! Wire and domain types for search hits.

use serde::{Deserialize, Deserializer, Serialize};

/// Discussion page prefix used when a story carries no external link.
const ITEM_PERMALINK_BASE: &str = "https://news.ycombinator.com/item?id=";

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
	/// Algolia object identifier, unique within a page.
	#[serde(rename = "objectID")]
	pub object_id: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub title: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub author: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub num_comments: u64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub points: u64,
}

impl Item {
	/// Build an item with the identifying fields set and everything else empty.
	#[must_use]
	pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			object_id: object_id.into(),
			title: title.into(),
			url: String::new(),
			author: String::new(),
			num_comments: 0,
			points: 0,
		}
	}

	/// The external link if present, otherwise the HN discussion page.
	#[must_use]
	pub fn link(&self) -> String {
		if self.url.trim().is_empty() {
			format!("{ITEM_PERMALINK_BASE}{}", self.object_id)
		} else {
			self.url.clone()
		}
	}
}

/// One page of hits returned for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPage {
	#[serde(default)]
	pub hits: Vec<Item>,
	#[serde(default)]
	pub page: u32,
}

/// Algolia sends `null` for fields that do not apply to a hit (comments have
/// no title, polls no url).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
