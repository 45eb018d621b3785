mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::Theme;

/// Look up a built-in theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtins::registrations()
		.iter()
		.find(|registration| {
			normalize_name(&registration.name) == wanted
				|| registration
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|registration| registration.theme)
}

/// Names of every built-in theme, in bundle order.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
