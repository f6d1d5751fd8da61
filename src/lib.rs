//! Novel Agent is a terminal console for co-authoring fiction.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the manuscript (chapters and project bible), the status
//!   log, and configuration.
//! - [`commands`] interprets each submitted line as either a command or prose
//!   for the current chapter.
//! - [`ui`] renders the sidebar, editor, input and log panes and runs the
//!   interactive event loop.
//! - [`utils`] holds color handling and diagnostics setup.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which loads configuration and dispatches into
//! [`ui::console_loop`] for interactive sessions.

pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
