//! Terminal UI layer for the writing console.
//!
//! The UI module owns rendering, layout, keyboard handling, and loop control
//! for the text user interface.
//!
//! Key submodules include:
//! - [`console_loop`]: the event loop that feeds key presses and pastes to the
//!   [`view::ConsoleView`], which dispatches submitted lines to
//!   [`crate::commands`].
//! - [`renderer`], [`layout`], and [`wrap`]: view composition and frame output.
//! - [`theme`]: color and style policy.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the manuscript and status log.

pub mod console_loop;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod view;
pub mod wrap;
