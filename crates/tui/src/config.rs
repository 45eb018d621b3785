/// Text rendered around the prompt, table and footer.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Label shown before the query prompt.
	pub input_title: String,
	/// Placeholder shown when the prompt is empty.
	pub placeholder: String,
	/// Title of the bordered results table.
	pub table_title: String,
	/// Label of the control that loads the next page.
	pub more_label: String,
	/// Title of the panel shown when a fetch failed.
	pub error_title: String,
	/// Shown in place of an empty table.
	pub empty_message: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			input_title: "HN".to_string(),
			placeholder: "Search Hacker News".to_string(),
			table_title: "Stories".to_string(),
			more_label: "More history".to_string(),
			error_title: "Something went wrong".to_string(),
			empty_message: "No results".to_string(),
		}
	}
}

impl UiLabels {
	/// Override the prompt label, ignoring blank values.
	#[must_use]
	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		let title = title.into();
		if !title.trim().is_empty() {
			self.input_title = title;
		}
		self
	}
}
