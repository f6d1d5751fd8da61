use crate::commands::registry::CommandInvocation;
use crate::commands::{all_commands, CommandResult};
use crate::core::app::App;
use tracing::info;

pub(crate) fn handle_help(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    let usages: Vec<String> = all_commands()
        .iter()
        .map(|command| format!("{} ({})", command.usage, command.help.trim_end_matches('.')))
        .collect();
    app.status
        .append(format!("Commands: {}. Anything else is prose.", usages.join("; ")));
    CommandResult::Continue
}

// Persistence is not implemented yet; the command only acknowledges.
pub(crate) fn handle_save(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    info!(chapters = app.document.len(), "save requested");
    app.status.append("Saved (stub)");
    CommandResult::Continue
}

pub(crate) fn handle_quit(_app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::Quit
}
