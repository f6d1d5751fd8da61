use crate::core::config::data::{path_display, Config};
use std::path::Path;

impl Config {
    pub fn print_all(&self, path: &Path) {
        println!("Configuration file: {}", path_display(path));
        println!("  project: {}", self.project_name());
        let bible = self.bible();
        if bible.is_empty() {
            println!("  bible: (empty)");
        } else {
            println!("  bible:");
            for fact in &bible {
                println!("    - {fact}");
            }
        }
        match self.opening_chapter() {
            Some(seed) => println!("  opening-chapter: {}", seed.title),
            None => println!("  opening-chapter: (none)"),
        }
        println!(
            "  layout: sidebar {} cols, input {} rows, log {} rows",
            self.sidebar_width(),
            self.input_height(),
            self.log_height()
        );
        let slots = [
            ("panel", &self.theme.panel),
            ("primary", &self.theme.primary),
            ("accent", &self.theme.accent),
            ("text", &self.theme.text),
            ("warning", &self.theme.warning),
        ];
        for (name, value) in slots {
            match value {
                Some(color) => println!("  theme.{name}: {color}"),
                None => println!("  theme.{name}: (default)"),
            }
        }
    }
}
