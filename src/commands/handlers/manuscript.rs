use crate::commands::registry::{parse_chapter_index, CommandInvocation};
use crate::commands::CommandResult;
use crate::core::app::App;
use crate::core::document::DocumentError;

pub(crate) fn handle_new(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    let title = Some(invocation.args).filter(|args| !args.is_empty());
    let index = app.document.add_chapter(title).index();
    app.status.append(format!("Created chapter {index}"));
    CommandResult::DocumentChanged
}

pub(crate) fn handle_goto(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    // ArgSpec::ChapterIndex has already checked the argument.
    let index = parse_chapter_index(invocation.args).unwrap_or(0);
    match app.document.select_chapter(index) {
        Ok(chapter) => {
            let index = chapter.index();
            app.status.append(format!("Switched to chapter {index}"));
            CommandResult::DocumentChanged
        }
        Err(DocumentError::NoSuchChapter { index, count }) => {
            app.status.warn(format!("No chapter {index} (have {count})"));
            CommandResult::Continue
        }
        Err(err) => {
            app.status.warn(err.to_string());
            CommandResult::Continue
        }
    }
}

pub(crate) fn handle_chapters(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    if app.document.is_empty() {
        app.status.append("No chapters yet");
        return CommandResult::Continue;
    }
    let current = app.document.current_chapter().map(|c| c.index());
    let listing: Vec<String> = app
        .document
        .chapters()
        .iter()
        .map(|chapter| {
            let marker = if Some(chapter.index()) == current { "*" } else { "" };
            format!("{}{}. {}", marker, chapter.index(), chapter.title())
        })
        .collect();
    app.status.append(format!("Chapters: {}", listing.join(", ")));
    CommandResult::Continue
}
