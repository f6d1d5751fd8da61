//! Chapters and the project bible.
//!
//! The [`Document`] is the only owner of chapter data. Callers get shared
//! borrows for rendering and go through the mutating methods for edits, so the
//! contiguous-index and current-chapter invariants hold at every step.

use tracing::debug;

pub const UNTITLED_CHAPTER: &str = "Untitled";

/// Errors raised by document mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Prose was submitted while the document has no chapters.
    #[error("no active chapter")]
    NoActiveChapter,

    /// A chapter index outside `1..=count` was requested.
    #[error("no chapter {index} (document has {count})")]
    NoSuchChapter { index: usize, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    index: usize,
    title: String,
    body: String,
}

impl Chapter {
    /// 1-based position of the chapter in the manuscript.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Heading shown above the chapter body in the editor pane.
    pub fn heading(&self) -> String {
        format!("Chapter {}: {}", self.index, self.title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    chapters: Vec<Chapter>,
    bible: Vec<String>,
    // Position into `chapters`; `None` only while `chapters` is empty.
    current: Option<usize>,
}

impl Document {
    pub fn new(bible: Vec<String>) -> Self {
        Self {
            chapters: Vec::new(),
            bible,
            current: None,
        }
    }

    /// Appends a chapter with the next index and makes it current.
    pub fn add_chapter(&mut self, title: Option<&str>) -> &Chapter {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_CHAPTER);
        let index = self.chapters.len() + 1;
        self.chapters.push(Chapter {
            index,
            title: title.to_string(),
            body: String::new(),
        });
        self.current = Some(self.chapters.len() - 1);
        debug!(index, title, "chapter added");
        &self.chapters[index - 1]
    }

    /// Seeds a chapter that already has text, used for the opening chapter.
    pub fn add_chapter_with_body(&mut self, title: Option<&str>, body: &str) -> &Chapter {
        let position = self.add_chapter(title).index() - 1;
        self.chapters[position].body.push_str(body);
        &self.chapters[position]
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.current.and_then(|pos| self.chapters.get(pos))
    }

    /// Appends `text` verbatim to the current chapter's body.
    pub fn append_to_current(&mut self, text: &str) -> Result<(), DocumentError> {
        let pos = self.current.ok_or(DocumentError::NoActiveChapter)?;
        let chapter = self
            .chapters
            .get_mut(pos)
            .ok_or(DocumentError::NoActiveChapter)?;
        chapter.body.push_str(text);
        Ok(())
    }

    /// Moves the current-chapter pointer to the chapter with the given 1-based index.
    pub fn select_chapter(&mut self, index: usize) -> Result<&Chapter, DocumentError> {
        let count = self.chapters.len();
        if index == 0 || index > count {
            return Err(DocumentError::NoSuchChapter { index, count });
        }
        self.current = Some(index - 1);
        Ok(&self.chapters[index - 1])
    }

    pub fn bible(&self) -> &[String] {
        &self.bible
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}
