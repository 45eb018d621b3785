//! Sort keys and the derived ordering of the visible list.

use std::cmp::Ordering;
use std::fmt;

use crate::model::Item;

/// Field the visible list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
	/// Insertion order.
	#[default]
	None,
	Title,
	Author,
	Comments,
	Points,
}

impl SortKey {
	/// Every key, in column order.
	pub const ALL: [SortKey; 5] = [
		SortKey::None,
		SortKey::Title,
		SortKey::Author,
		SortKey::Comments,
		SortKey::Points,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SortKey::None => "none",
			SortKey::Title => "title",
			SortKey::Author => "author",
			SortKey::Comments => "comments",
			SortKey::Points => "points",
		}
	}

	/// Base ordering before any reversal: text ascending, counts descending.
	fn compare(self, a: &Item, b: &Item) -> Ordering {
		match self {
			SortKey::None => Ordering::Equal,
			SortKey::Title => a.title.cmp(&b.title),
			SortKey::Author => a.author.cmp(&b.author),
			SortKey::Comments => b.num_comments.cmp(&a.num_comments),
			SortKey::Points => b.points.cmp(&a.points),
		}
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Global sort selection shared by every query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
	pub key: SortKey,
	pub reverse: bool,
}

impl SortState {
	/// Selecting the current key flips the direction; any other key resets it.
	pub fn select(&mut self, key: SortKey) {
		if self.key == key {
			self.reverse = !self.reverse;
		} else {
			self.key = key;
			self.reverse = false;
		}
	}

	/// Apply the selection to a list of hits without mutating it.
	#[must_use]
	pub fn apply<'a>(&self, hits: &'a [Item]) -> Vec<&'a Item> {
		let mut ordered: Vec<&Item> = hits.iter().collect();
		if self.key != SortKey::None {
			ordered.sort_by(|a, b| self.key.compare(a, b));
		}
		if self.reverse {
			ordered.reverse();
		}
		ordered
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str, title: &str, author: &str, comments: u64, points: u64) -> Item {
		Item {
			object_id: id.into(),
			title: title.into(),
			url: String::new(),
			author: author.into(),
			num_comments: comments,
			points,
		}
	}

	fn ids(list: &[&Item]) -> Vec<String> {
		list.iter().map(|item| item.object_id.clone()).collect()
	}

	fn sample() -> Vec<Item> {
		vec![
			item("a", "Beta", "zed", 3, 10),
			item("b", "Alpha", "amy", 9, 2),
			item("c", "Gamma", "mia", 1, 7),
		]
	}

	#[test]
	fn none_keeps_insertion_order() {
		let hits = sample();
		let sort = SortState::default();
		assert_eq!(ids(&sort.apply(&hits)), ["a", "b", "c"]);
	}

	#[test]
	fn text_keys_sort_ascending() {
		let hits = sample();
		let mut sort = SortState::default();
		sort.select(SortKey::Title);
		assert_eq!(ids(&sort.apply(&hits)), ["b", "a", "c"]);

		sort.select(SortKey::Author);
		assert_eq!(ids(&sort.apply(&hits)), ["b", "c", "a"]);
	}

	#[test]
	fn numeric_keys_sort_descending() {
		let hits = sample();
		let mut sort = SortState::default();
		sort.select(SortKey::Comments);
		assert_eq!(ids(&sort.apply(&hits)), ["b", "a", "c"]);

		sort.select(SortKey::Points);
		assert_eq!(ids(&sort.apply(&hits)), ["a", "c", "b"]);
	}

	#[test]
	fn reverse_flips_the_sorted_list() {
		let hits = sample();
		let mut sort = SortState::default();
		sort.select(SortKey::Points);
		sort.select(SortKey::Points);
		assert!(sort.reverse);
		assert_eq!(ids(&sort.apply(&hits)), ["b", "c", "a"]);
	}

	#[test]
	fn selecting_none_twice_reverses_insertion_order() {
		let hits = sample();
		let mut sort = SortState::default();
		sort.select(SortKey::None);
		assert_eq!(sort.key, SortKey::None);
		assert!(sort.reverse);
		assert_eq!(ids(&sort.apply(&hits)), ["c", "b", "a"]);
	}

	#[test]
	fn equal_keys_keep_relative_order() {
		let hits = vec![
			item("x", "Same", "a", 0, 5),
			item("y", "Same", "b", 0, 5),
		];
		let mut sort = SortState::default();
		sort.select(SortKey::Points);
		assert_eq!(ids(&sort.apply(&hits)), ["x", "y"]);
		sort.select(SortKey::Title);
		assert_eq!(ids(&sort.apply(&hits)), ["x", "y"]);
	}
}
