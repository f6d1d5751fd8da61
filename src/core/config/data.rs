use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChapterSeed {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Display name shown in the console header
    pub name: Option<String>,
    /// Facts listed in the sidebar, in order
    pub bible: Option<Vec<String>>,
    /// Create the opening chapter at startup (default: true)
    pub seed_opening_chapter: Option<bool>,
    pub opening_chapter: Option<ChapterSeed>,
}

/// Pane sizes, in terminal cells.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub sidebar_width: Option<u16>,
    /// Height of the status log pane including borders
    pub log_height: Option<u16>,
    /// Height of the input line including borders
    pub input_height: Option<u16>,
}

/// Color slots. Values are color names ("cyan") or hex strings ("#5f5fd7").
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub panel: Option<String>,
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub warning: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
