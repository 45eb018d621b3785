//! UI building blocks shared across rendering and state modules.

/// Error panel shown in place of the results table.
pub mod error;
/// Footer with the control that loads the next page.
pub mod footer;
/// Query prompt and status line.
pub mod prompt;
/// Table row construction and highlighting.
pub mod rows;
/// Scrollbar for the results viewport.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use error::render_error;
pub use footer::{FooterContext, render_footer};
pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::build_story_rows;
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::{TableSpec, render_table};
