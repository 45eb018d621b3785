use std::path::PathBuf;

use log::LevelFilter;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub initial_query: String,
	pub theme: Option<String>,
	pub input_title: Option<String>,
	pub log_level: LevelFilter,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  API base URL: {}", self.base_url),
			format!("  Initial query: {:?}", self.initial_query),
			format!(
				"  UI theme: {}",
				self.theme.as_deref().unwrap_or("(use the library default)")
			),
		];
		if let Some(title) = &self.input_title {
			lines.push(format!("  Prompt title: {title}"));
		}
		lines.push(format!("  Log level: {}", self.log_level));
		lines.push(format!("  Log file: {}", self.log_file.display()));

		let mut summary = lines.join("\n");
		summary.push('\n');
		summary
	}
}
