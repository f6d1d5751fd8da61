use crate::core::config::data::ThemeConfig;
use crate::utils::color::{parse_color, quantize_color, ColorDepth};
use ratatui::style::{Color, Modifier, Style};

/// Resolved colors for the console panes.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub panel: Color,
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            panel: Color::Rgb(0x1e, 0x1e, 0x2e),
            primary: Color::Cyan,
            accent: Color::Rgb(0x5f, 0x5f, 0xd7),
            text: Color::White,
            warning: Color::Yellow,
        }
    }
}

impl Theme {
    /// Applies configured overrides on top of the defaults. Unparseable values keep the default.
    pub fn from_config(config: &ThemeConfig, depth: ColorDepth) -> Self {
        let defaults = Theme::default();
        let pick = |value: &Option<String>, fallback: Color| {
            let color = value.as_deref().and_then(parse_color).unwrap_or(fallback);
            quantize_color(color, depth)
        };
        Theme {
            panel: pick(&config.panel, defaults.panel),
            primary: pick(&config.primary, defaults.primary),
            accent: pick(&config.accent, defaults.accent),
            text: pick(&config.text, defaults.text),
            warning: pick(&config.warning, defaults.warning),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn sidebar_style(&self) -> Style {
        Style::default().bg(self.panel).fg(self.text)
    }

    pub fn sidebar_heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn chapter_heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn log_info_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn log_warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn log_seq_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
