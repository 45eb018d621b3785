use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail, ensure};
use hnsearch_core::{DEFAULT_BASE_URL, DEFAULT_QUERY};
use log::LevelFilter;
use serde::Deserialize;
use url::Url;

use super::resolved::ResolvedConfig;
use crate::app_dirs;
use crate::cli::CliArgs;

const LOG_FILE_NAME: &str = "hnsearch.log";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	log: LogSection,
}

/// Search endpoint settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	initial_query: Option<String>,
	theme: Option<String>,
	input_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level {
			self.log.level = Some(level.as_str().to_string());
		}
		if let Some(file) = cli.log_file.clone() {
			self.log.file = Some(file);
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let base_url = self
			.api
			.base_url
			.map(|url| url.trim().to_string())
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		let parsed = Url::parse(&base_url)
			.with_context(|| format!("api.base_url `{base_url}` is not a valid URL"))?;
		ensure!(
			matches!(parsed.scheme(), "http" | "https"),
			"api.base_url must use http or https, got `{}`",
			parsed.scheme()
		);

		let theme = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty());
		if let Some(name) = &theme
			&& hnsearch_tui::style::by_name(name).is_none()
		{
			bail!(
				"unknown theme `{name}` (available: {})",
				hnsearch_tui::style::names().join(", ")
			);
		}

		let log_level = match self.log.level.as_deref().map(str::trim) {
			None | Some("") => LevelFilter::Warn,
			Some(level) => LevelFilter::from_str(level)
				.with_context(|| format!("log.level `{level}` is not a log level"))?,
		};
		let log_file = match self.log.file {
			Some(file) => file,
			None => app_dirs::get_cache_dir()?.join(LOG_FILE_NAME),
		};

		Ok(ResolvedConfig {
			base_url,
			initial_query: self
				.ui
				.initial_query
				.unwrap_or_else(|| DEFAULT_QUERY.to_string()),
			theme,
			input_title: self
				.ui
				.input_title
				.map(|title| title.trim().to_string())
				.filter(|title| !title.is_empty()),
			log_level,
			log_file,
		})
	}
}
