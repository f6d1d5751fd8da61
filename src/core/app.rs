use crate::core::config::Config;
use crate::core::document::Document;
use crate::core::status_log::StatusLog;
use tracing::info;

/// Process-wide console state: the manuscript and the status log.
///
/// Created once at startup and handed to the console view, which is the only
/// place that mutates it (through [`crate::commands::process_input`]).
#[derive(Debug, Clone, Default)]
pub struct App {
    pub document: Document,
    pub status: StatusLog,
}

impl App {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            status: StatusLog::new(),
        }
    }

    /// Builds the startup state from configuration. `empty` skips the opening chapter.
    pub fn from_config(config: &Config, empty: bool) -> Self {
        let mut document = Document::new(config.bible());
        if !empty {
            if let Some(seed) = config.opening_chapter() {
                document.add_chapter_with_body(Some(&seed.title), &seed.body);
            }
        }
        info!(
            chapters = document.len(),
            facts = document.bible().len(),
            "project loaded"
        );
        Self::new(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::defaults::{DEFAULT_OPENING_BODY, DEFAULT_OPENING_TITLE};

    #[test]
    fn default_config_seeds_one_chapter() {
        let app = App::from_config(&Config::default(), false);
        let chapter = app.document.current_chapter().expect("opening chapter");
        assert_eq!(chapter.index(), 1);
        assert_eq!(chapter.title(), DEFAULT_OPENING_TITLE);
        assert_eq!(chapter.body(), DEFAULT_OPENING_BODY);
        assert_eq!(app.document.bible().len(), 2);
        assert!(app.status.is_empty());
    }

    #[test]
    fn empty_flag_skips_opening_chapter_but_keeps_bible() {
        let app = App::from_config(&Config::default(), true);
        assert!(app.document.is_empty());
        assert!(!app.document.bible().is_empty());
    }
}
