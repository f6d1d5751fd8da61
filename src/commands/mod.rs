//! Input interpretation for the console.
//!
//! Every submitted line is either a command from the fixed vocabulary in
//! [`registry`] or prose for the current chapter. Recognition never fails:
//! anything that is not a well-formed command is prose.

mod handlers;
mod registry;

pub use registry::{all_commands, find_command, ArgSpec, Command, CommandInvocation};

use crate::core::app::App;
use crate::core::document::DocumentError;
use tracing::{debug, warn};

/// What the view has to do after a line was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Only the status log may have changed.
    Continue,
    /// The current chapter or its body changed; the editor pane is stale.
    DocumentChanged,
    /// Leave the console.
    Quit,
}

/// Commands the presentation layer can bind keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    NewChapter,
    Save,
    Quit,
}

impl CommandId {
    pub fn keyword(self) -> &'static str {
        match self {
            CommandId::NewChapter => "new",
            CommandId::Save => "save",
            CommandId::Quit => "quit",
        }
    }
}

pub fn process_input(app: &mut App, input: &str) -> CommandResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return CommandResult::Continue;
    }

    let (head, args) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    let keyword = head.strip_prefix('/').unwrap_or(head);

    if let Some(command) = registry::find_command(keyword) {
        if command.args.accepts(args) {
            debug!(command = command.name, args, "running command");
            return (command.handler)(app, CommandInvocation { args });
        }
        debug!(command = command.name, "arguments do not fit; treating as prose");
    }

    append_prose(app, input.trim_end_matches(['\r', '\n']))
}

/// Runs a bound command exactly as if its keyword had been typed.
pub fn execute_command(app: &mut App, id: CommandId) -> CommandResult {
    process_input(app, id.keyword())
}

fn append_prose(app: &mut App, text: &str) -> CommandResult {
    let needs_break = app
        .document
        .current_chapter()
        .is_some_and(|chapter| !chapter.body().is_empty() && !chapter.body().ends_with('\n'));
    let result = if needs_break {
        app.document.append_to_current(&format!("\n{text}"))
    } else {
        app.document.append_to_current(text)
    };

    match result {
        Ok(()) => CommandResult::DocumentChanged,
        Err(DocumentError::NoActiveChapter) => {
            warn!("prose submitted with no active chapter");
            app.status.warn("No active chapter");
            CommandResult::Continue
        }
        Err(err) => {
            warn!(%err, "prose append failed");
            app.status.warn(err.to_string());
            CommandResult::Continue
        }
    }
}

#[cfg(test)]
mod tests;
