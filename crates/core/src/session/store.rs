use std::collections::HashMap;

use crate::model::{Item, SearchResultPage};

/// Accumulated hits for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResults {
	/// Hits in arrival order. Overlapping pages are not deduplicated.
	pub hits: Vec<Item>,
	/// Last page number received.
	pub page: u32,
}

impl QueryResults {
	/// Remove the first hit with `object_id`, returning it.
	pub fn remove_first(&mut self, object_id: &str) -> Option<Item> {
		let position = self.hits.iter().position(|hit| hit.object_id == object_id)?;
		Some(self.hits.remove(position))
	}
}

/// Per-query cache of every page received so far.
#[derive(Debug, Clone, Default)]
pub struct ResultsByQuery {
	entries: HashMap<String, QueryResults>,
}

impl ResultsByQuery {
	#[must_use]
	pub fn get(&self, query: &str) -> Option<&QueryResults> {
		self.entries.get(query)
	}

	pub fn get_mut(&mut self, query: &str) -> Option<&mut QueryResults> {
		self.entries.get_mut(query)
	}

	#[must_use]
	pub fn contains(&self, query: &str) -> bool {
		self.entries.contains_key(query)
	}

	/// Concatenate a received page onto the entry for `query`.
	pub fn append(&mut self, query: &str, page: SearchResultPage) -> &QueryResults {
		let entry = self.entries.entry(query.to_string()).or_default();
		entry.hits.extend(page.hits);
		entry.page = page.page;
		entry
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
