//! Mapping from key events to console actions.
//!
//! Single-letter bindings only fire while the panes have focus; in the input
//! line the same letters are ordinary text.

use crate::commands::CommandId;
use crate::ui::view::Focus;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send the input line to the interpreter.
    Submit,
    /// Move focus between the input line and the panes.
    ToggleFocus,
    /// Run a bound command.
    Command(CommandId),
    /// Forward the key to the line editor.
    Edit,
    Ignore,
}

/// Physical key bound to each command in pane focus.
pub const PANE_BINDINGS: &[(char, CommandId, &str)] = &[
    ('q', CommandId::Quit, "Quit"),
    ('n', CommandId::NewChapter, "New Chapter"),
    ('s', CommandId::Save, "Save"),
];

pub fn resolve_key(focus: Focus, key: &KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return KeyAction::Command(CommandId::Quit);
    }

    match (focus, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Esc) => KeyAction::ToggleFocus,
        (Focus::Input, KeyCode::Enter) => KeyAction::Submit,
        (Focus::Input, _) => KeyAction::Edit,
        (Focus::Panes, KeyCode::Enter) => KeyAction::ToggleFocus,
        (Focus::Panes, KeyCode::Char(c))
            if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            pane_binding(c)
                .map(KeyAction::Command)
                .unwrap_or(KeyAction::Ignore)
        }
        (Focus::Panes, _) => KeyAction::Ignore,
    }
}

fn pane_binding(c: char) -> Option<CommandId> {
    PANE_BINDINGS
        .iter()
        .find(|(key, _, _)| key.eq_ignore_ascii_case(&c))
        .map(|(_, id, _)| *id)
}
