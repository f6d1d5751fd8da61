use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::config::Config;

/// Pane sizes taken from the `[layout]` config table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneSizes {
    pub sidebar_width: u16,
    pub input_height: u16,
    pub log_height: u16,
}

impl PaneSizes {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sidebar_width: config.sidebar_width(),
            input_height: config.input_height(),
            log_height: config.log_height(),
        }
    }
}

/// Screen regions for one frame.
///
/// ```text
/// header
/// sidebar | editor
///         | input
/// status log
/// footer
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaneLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub editor: Rect,
    pub input: Rect,
    pub log: Rect,
    pub footer: Rect,
}

impl PaneLayout {
    pub fn compute(area: Rect, sizes: PaneSizes) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(sizes.log_height),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sizes.sidebar_width), Constraint::Min(0)])
            .split(rows[1]);

        let editor_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(sizes.input_height)])
            .split(columns[1]);

        Self {
            header: rows[0],
            sidebar: columns[0],
            editor: editor_column[0],
            input: editor_column[1],
            log: rows[2],
            footer: rows[3],
        }
    }

    /// How many log entries fit inside the bordered log pane.
    pub fn log_capacity(&self) -> usize {
        self.log.height.saturating_sub(2) as usize
    }
}
