//! File-backed logging.
//!
//! The terminal belongs to the UI while it runs, so records go to a log file
//! instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Install the global logger writing to `path` at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn initialize(path: &Path, level: LevelFilter) -> Result<()> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	Builder::from_env(Env::default().default_filter_or(level.as_str()))
		.target(Target::Pipe(Box::new(file)))
		.format_timestamp_millis()
		.try_init()
		.context("logger was already initialised")?;

	log::info!("logging to {} at {level}", path.display());
	Ok(())
}
