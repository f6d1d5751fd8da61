use crate::core::config::data::{ChapterSeed, Config};

pub const DEFAULT_PROJECT_NAME: &str = "Novel Agent";
pub const DEFAULT_BIBLE: &[&str] = &["Protagonist: Lee", "World: Neo-Seoul"];
pub const DEFAULT_OPENING_TITLE: &str = "The Awakening";
pub const DEFAULT_OPENING_BODY: &str = "The neon lights of Neo-Seoul flickered...";

pub const DEFAULT_SIDEBAR_WIDTH: u16 = 30;
pub const DEFAULT_LOG_HEIGHT: u16 = 7;
pub const DEFAULT_INPUT_HEIGHT: u16 = 3;

pub const MIN_SIDEBAR_WIDTH: u16 = 10;
// Borders plus one visible row.
pub const MIN_PANE_HEIGHT: u16 = 3;

impl Config {
    /// The configuration written by `novel init-config`: every default spelled out.
    pub fn with_defaults() -> Self {
        let mut config = Config::default();
        config.project.name = Some(DEFAULT_PROJECT_NAME.to_string());
        config.project.bible = Some(DEFAULT_BIBLE.iter().map(|s| s.to_string()).collect());
        config.project.seed_opening_chapter = Some(true);
        config.project.opening_chapter = Some(default_opening_chapter());
        config.layout.sidebar_width = Some(DEFAULT_SIDEBAR_WIDTH);
        config.layout.log_height = Some(DEFAULT_LOG_HEIGHT);
        config.layout.input_height = Some(DEFAULT_INPUT_HEIGHT);
        config
    }

    pub fn project_name(&self) -> &str {
        self.project
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_PROJECT_NAME)
    }

    pub fn bible(&self) -> Vec<String> {
        match &self.project.bible {
            Some(facts) => facts.clone(),
            None => DEFAULT_BIBLE.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The chapter to create at startup, or `None` to start empty.
    pub fn opening_chapter(&self) -> Option<ChapterSeed> {
        if !self.project.seed_opening_chapter.unwrap_or(true) {
            return None;
        }
        Some(
            self.project
                .opening_chapter
                .clone()
                .unwrap_or_else(default_opening_chapter),
        )
    }

    pub fn sidebar_width(&self) -> u16 {
        self.layout
            .sidebar_width
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
            .max(MIN_SIDEBAR_WIDTH)
    }

    pub fn log_height(&self) -> u16 {
        self.layout
            .log_height
            .unwrap_or(DEFAULT_LOG_HEIGHT)
            .max(MIN_PANE_HEIGHT)
    }

    pub fn input_height(&self) -> u16 {
        self.layout
            .input_height
            .unwrap_or(DEFAULT_INPUT_HEIGHT)
            .max(MIN_PANE_HEIGHT)
    }
}

fn default_opening_chapter() -> ChapterSeed {
    ChapterSeed {
        title: DEFAULT_OPENING_TITLE.to_string(),
        body: DEFAULT_OPENING_BODY.to_string(),
    }
}
