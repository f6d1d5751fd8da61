//! Console view state: the pane contents derived from [`App`], input focus,
//! and the running/terminated lifecycle.

use ratatui::crossterm::event::KeyEvent;
use ratatui::text::{Line, Span};
use tracing::{debug, info};
use tui_textarea::{Input, TextArea};

use crate::commands::{self, CommandId, CommandResult};
use crate::core::app::App;
use crate::core::config::Config;
use crate::ui::console_loop::keybindings::{resolve_key, KeyAction};
use crate::ui::layout::PaneSizes;
use crate::ui::theme::Theme;
use crate::utils::color::ColorDepth;

pub const INPUT_PLACEHOLDER: &str = "Type commands or prose here...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Running,
    /// Absorbing: nothing leaves this state.
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Panes,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Input => Focus::Panes,
            Focus::Panes => Focus::Input,
        }
    }
}

pub struct ConsoleView {
    app: App,
    state: ViewState,
    focus: Focus,
    input: TextArea<'static>,
    theme: Theme,
    sizes: PaneSizes,
    title: String,
    // Built once; the bible never changes while the console runs.
    sidebar: Vec<Line<'static>>,
    editor: EditorPane,
}

/// Rendered editor contents, rebuilt only after the document changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorPane {
    pub heading: Option<String>,
    pub body: String,
    pub revision: u64,
}

impl ConsoleView {
    pub fn new(app: App, config: &Config, depth: ColorDepth) -> Self {
        let theme = Theme::from_config(&config.theme, depth);
        let sidebar = build_sidebar(&app, &theme);
        let mut view = Self {
            app,
            state: ViewState::Running,
            focus: Focus::Input,
            input: new_input(&theme),
            theme,
            sizes: PaneSizes::from_config(config),
            title: format!(
                "{} \u{2022} novel-agent v{}",
                config.project_name(),
                env!("CARGO_PKG_VERSION")
            ),
            sidebar,
            editor: EditorPane::default(),
        };
        view.refresh_editor();
        view
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ViewState::Terminated
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn sizes(&self) -> PaneSizes {
        self.sizes
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sidebar_lines(&self) -> &[Line<'static>] {
        &self.sidebar
    }

    pub fn editor(&self) -> &EditorPane {
        &self.editor
    }

    pub fn input(&self) -> &TextArea<'static> {
        &self.input
    }

    pub fn input_text(&self) -> String {
        self.input.lines().join("\n")
    }

    /// Interprets one line exactly as if it had been typed and submitted.
    pub fn submit_line(&mut self, line: &str) -> CommandResult {
        if self.is_terminated() {
            return CommandResult::Quit;
        }
        let result = commands::process_input(&mut self.app, line);
        self.apply_result(result);
        result
    }

    pub fn run_command(&mut self, id: CommandId) -> CommandResult {
        if self.is_terminated() {
            return CommandResult::Quit;
        }
        let result = commands::execute_command(&mut self.app, id);
        self.apply_result(result);
        result
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.is_terminated() {
            return;
        }
        match resolve_key(self.focus, &key) {
            KeyAction::Submit => {
                let line = self.input_text();
                self.input = new_input(&self.theme);
                self.submit_line(&line);
            }
            KeyAction::ToggleFocus => {
                self.focus = self.focus.toggled();
                debug!(focus = ?self.focus, "focus changed");
            }
            KeyAction::Command(id) => {
                self.run_command(id);
            }
            KeyAction::Edit => {
                self.input.input(Input::from(key));
            }
            KeyAction::Ignore => {}
        }
    }

    /// Inserts pasted text into the input line. Line breaks become spaces.
    pub fn paste(&mut self, text: &str) {
        if self.is_terminated() {
            return;
        }
        let flattened = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
        self.input.insert_str(flattened);
        self.focus = Focus::Input;
    }

    pub fn terminate(&mut self) {
        if self.state == ViewState::Running {
            info!("console terminating");
            self.state = ViewState::Terminated;
        }
    }

    fn apply_result(&mut self, result: CommandResult) {
        match result {
            CommandResult::Continue => {}
            CommandResult::DocumentChanged => self.refresh_editor(),
            CommandResult::Quit => self.terminate(),
        }
    }

    fn refresh_editor(&mut self) {
        let chapter = self.app.document.current_chapter();
        self.editor = EditorPane {
            heading: chapter.map(|c| c.heading()),
            body: chapter.map(|c| c.body().to_string()).unwrap_or_default(),
            revision: self.editor.revision + 1,
        };
    }
}

fn new_input(theme: &Theme) -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_placeholder_text(INPUT_PLACEHOLDER);
    input.set_placeholder_style(theme.placeholder_style());
    input.set_style(theme.body_style());
    input.set_cursor_line_style(ratatui::style::Style::default());
    input
}

fn build_sidebar(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(" [ PROJECT BIBLE ] ", theme.sidebar_heading_style())),
        Line::from(""),
    ];
    lines.extend(
        app.document
            .bible()
            .iter()
            .map(|fact| Line::from(format!("- {fact}"))),
    );
    lines
}
