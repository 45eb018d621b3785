mod app_dirs;
mod cli;
mod logging;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use hnsearch_core::HttpSearchClient;
use hnsearch_tui::{SearchOutcome, UiLabels, style};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	logging::initialize(&resolved.log_file, resolved.log_level)?;

	let outcome = run_search(resolved)?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Start the interactive search with the resolved settings.
fn run_search(settings: ResolvedConfig) -> Result<SearchOutcome> {
	let client = HttpSearchClient::with_base_url(settings.base_url);

	let theme = match settings.theme.as_deref() {
		Some(name) => style::by_name(name).with_context(|| format!("unknown theme `{name}`"))?,
		None => style::default_theme(),
	};

	let mut labels = UiLabels::default();
	if let Some(title) = settings.input_title {
		labels = labels.with_input_title(title);
	}

	hnsearch_tui::run(client, settings.initial_query, theme, labels)
}
