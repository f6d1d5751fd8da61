use super::CommandResult;
use crate::core::app::App;

pub type CommandHandler = fn(&mut App, CommandInvocation<'_>) -> CommandResult;

/// What may follow the keyword. Input whose arguments do not fit is prose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgSpec {
    None,
    Optional,
    ChapterIndex,
}

impl ArgSpec {
    pub fn accepts(self, args: &str) -> bool {
        match self {
            ArgSpec::None => args.is_empty(),
            ArgSpec::Optional => true,
            ArgSpec::ChapterIndex => parse_chapter_index(args).is_some(),
        }
    }
}

/// A chapter number: ASCII digits only, no sign, greater than zero.
pub fn parse_chapter_index(args: &str) -> Option<usize> {
    if args.is_empty() || !args.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    args.parse::<usize>().ok().filter(|&index| index > 0)
}

pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub help: &'static str,
    pub args: ArgSpec,
    pub handler: CommandHandler,
}

impl Command {
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.eq_ignore_ascii_case(keyword)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(keyword))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CommandInvocation<'a> {
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(keyword: &str) -> Option<&'static Command> {
    all_commands().iter().find(|command| command.matches(keyword))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "new",
        aliases: &[],
        usage: "new [title]",
        help: "Start a new chapter and switch to it.",
        args: ArgSpec::Optional,
        handler: super::handlers::manuscript::handle_new,
    },
    Command {
        name: "goto",
        aliases: &[],
        usage: "goto <n>",
        help: "Switch the editor to chapter n.",
        args: ArgSpec::ChapterIndex,
        handler: super::handlers::manuscript::handle_goto,
    },
    Command {
        name: "chapters",
        aliases: &[],
        usage: "chapters",
        help: "List the chapters in order.",
        args: ArgSpec::None,
        handler: super::handlers::manuscript::handle_chapters,
    },
    Command {
        name: "save",
        aliases: &[],
        usage: "save",
        help: "Save the project.",
        args: ArgSpec::None,
        handler: super::handlers::core::handle_save,
    },
    Command {
        name: "help",
        aliases: &[],
        usage: "help",
        help: "Show the available commands.",
        args: ArgSpec::None,
        handler: super::handlers::core::handle_help,
    },
    Command {
        name: "quit",
        aliases: &["q"],
        usage: "quit | q",
        help: "Leave the console.",
        args: ArgSpec::None,
        handler: super::handlers::core::handle_quit,
    },
];
