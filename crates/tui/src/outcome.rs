use hnsearch_core::Item;

/// Result returned when the interactive session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	/// Whether the user picked a story rather than quitting.
	pub accepted: bool,
	/// The picked story, if any.
	pub selection: Option<Item>,
	/// Active query when the session ended.
	pub query: String,
}
