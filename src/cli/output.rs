use anyhow::Result;
use hnsearch_tui::SearchOutcome;
use serde_json::json;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(item) => println!("{}", item.link()),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(item) => json!({
			"objectID": item.object_id,
			"title": item.title,
			"url": item.link(),
			"author": item.author,
			"num_comments": item.num_comments,
			"points": item.points,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use hnsearch_core::Item;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_the_story() {
		let mut item = Item::new("42", "Redux in practice");
		item.url = "https://example.com/redux".into();
		item.points = 120;
		let outcome = SearchOutcome {
			accepted: true,
			query: "redux".into(),
			selection: Some(item),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["selection"]["objectID"], "42");
		assert_eq!(value["selection"]["url"], "https://example.com/redux");
		assert_eq!(value["selection"]["points"], 120);
	}

	#[test]
	fn json_uses_the_discussion_link_without_a_url() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "ask".into(),
			selection: Some(Item::new("7", "Ask HN")),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(
			value["selection"]["url"],
			"https://news.ycombinator.com/item?id=7"
		);
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "redux".into(),
			selection: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
