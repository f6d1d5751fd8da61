/// Severity of a status log entry. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Logical timestamp; strictly increasing, starting at 1.
    pub seq: u64,
    pub kind: LogKind,
    pub text: String,
}

/// Append-only record of user-visible events.
#[derive(Debug, Clone, Default)]
pub struct StatusLog {
    entries: Vec<LogEntry>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>) -> &LogEntry {
        self.push(LogKind::Info, text.into())
    }

    pub fn warn(&mut self, text: impl Into<String>) -> &LogEntry {
        self.push(LogKind::Warning, text.into())
    }

    fn push(&mut self, kind: LogKind, text: String) -> &LogEntry {
        let seq = self.entries.len() as u64 + 1;
        self.entries.push(LogEntry { seq, kind, text });
        &self.entries[self.entries.len() - 1]
    }

    /// The last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
