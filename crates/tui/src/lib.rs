//! Interactive terminal UI for `hnsearch`.
//!
//! The [`App`] owns the search [`Session`](hnsearch_core::Session), a
//! background fetch worker, and the widgets that render the derived result
//! list. [`run`] drives it until the user exits.

mod app;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod runtime;
pub mod style;

pub use app::App;
pub use config::UiLabels;
pub use outcome::SearchOutcome;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, default_theme};
