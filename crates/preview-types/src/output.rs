use serde::{Deserialize, Serialize};

/// Whether an entry is ordinary output or an error report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Info,
    Error,
}

impl EntryKind {
    /// The name used for this kind in generated documents (`appendEntry`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// One captured line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    pub kind: EntryKind,
    pub text: String,
}

impl OutputEntry {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Error,
            text: text.into(),
        }
    }
}

/// Explicit output capability handed to whatever produces program output.
///
/// The evaluator never reaches for a global console; it writes to the sink
/// it was given.
pub trait Sink {
    fn append_entry(&mut self, kind: EntryKind, text: String);
}

/// Ordered entries captured during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputLog {
    entries: Vec<OutputEntry>,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[OutputEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<OutputEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry texts in order, regardless of kind.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.kind == EntryKind::Error)
    }
}

impl Sink for OutputLog {
    fn append_entry(&mut self, kind: EntryKind, text: String) {
        self.entries.push(OutputEntry { kind, text });
    }
}

impl From<Vec<OutputEntry>> for OutputLog {
    fn from(entries: Vec<OutputEntry>) -> Self {
        Self { entries }
    }
}
