use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of content a submitted text is.
///
/// Produced once per run by the dispatcher and consumed by exactly one
/// downstream stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedKind {
    /// A complete document with a doctype or root element.
    FullDocument,
    /// Markup without the surrounding document.
    MarkupFragment,
    /// Browser script with no markup at all.
    ScriptOnly,
    /// The restricted teaching language run by the interpreter.
    TeachingLanguage,
}

impl DetectedKind {
    /// `true` when the text is handled by the sandbox renderer rather than
    /// the teaching interpreter.
    pub fn is_sandboxed(self) -> bool {
        !matches!(self, Self::TeachingLanguage)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullDocument => "full_document",
            Self::MarkupFragment => "markup_fragment",
            Self::ScriptOnly => "script_only",
            Self::TeachingLanguage => "teaching_language",
        }
    }
}

impl fmt::Display for DetectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
