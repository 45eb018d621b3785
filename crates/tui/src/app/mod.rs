//! Core application state and behavior for the interactive search.
//!
//! The [`App`] type aggregates the search session, UI state, and rendering
//! logic. Supporting modules partition the implementation into focused
//! pieces: actions (input handling), rendering, fetch coordination, and the
//! results table state.

mod actions;
mod fetch;
mod render;
mod results;
mod state;
#[cfg(test)]
mod tests;

pub(crate) use fetch::FetchRuntime;
pub use state::App;
