//! Dispatcher: decides what kind of content a submitted text is.
//!
//! Heuristic and lexical. Checks run in a fixed order and the first match
//! wins, so text that looks like both markup and the teaching language is
//! always treated as markup.

use once_cell::sync::Lazy;
use preview_types::DetectedKind;
use regex::Regex;
use tracing::debug;

static DOCUMENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<!doctype\s+html|<html[\s>]").expect("document marker pattern"));

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>").expect("tag pattern")
});

static TEACHING_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"print\(",
        r"\bdef\s",
        r"\bimport\s",
        r"(?m)^#",
        r#"(?m)^[ \t]*[A-Za-z_]\w*[ \t]*=[ \t]*(?:"[^"\n]*"|'[^'\n]*'|-?\d+(?:\.\d+)?|True|False|\[[^\n]*\]|\{[^\n]*\})[ \t]*\r?$"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("teaching signal pattern"))
    .collect()
});

/// Classify `source`. Total and pure: every text, including the empty one,
/// gets exactly one kind.
///
/// 1. A document-type declaration or `<html>` root → `FullDocument`.
/// 2. Any tag-shaped token → `MarkupFragment`.
/// 3. A `print(` call, `def `, `import `, a line starting with `#`, or an
///    `identifier = literal` line with nothing after the literal →
///    `TeachingLanguage`.
/// 4. Everything else → `ScriptOnly`.
pub fn classify(source: &str) -> DetectedKind {
    let kind = if DOCUMENT_MARKER.is_match(source) {
        DetectedKind::FullDocument
    } else if TAG.is_match(source) {
        DetectedKind::MarkupFragment
    } else if is_teaching_language(source) {
        DetectedKind::TeachingLanguage
    } else {
        DetectedKind::ScriptOnly
    };
    debug!(%kind, len = source.len(), "classified source");
    kind
}

fn is_teaching_language(source: &str) -> bool {
    TEACHING_SIGNALS.iter().any(|signal| signal.is_match(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctype_is_case_insensitive() {
        assert_eq!(classify("<!doctype HTML>"), DetectedKind::FullDocument);
        assert_eq!(classify("<HTML lang=\"en\"></HTML>"), DetectedKind::FullDocument);
    }

    #[test]
    fn test_less_than_comparison_is_not_a_tag() {
        assert_eq!(classify("if (a < b && c > d) {}"), DetectedKind::ScriptOnly);
    }

    #[test]
    fn test_assignment_signal_requires_bare_literal() {
        assert!(is_teaching_language("x = 5"));
        assert!(is_teaching_language("name = 'Ada'"));
        assert!(is_teaching_language("xs = [1, 2]"));
        assert!(!is_teaching_language("x = 5;"));
        assert!(!is_teaching_language("let x = 5"));
        assert!(!is_teaching_language("x == 5"));
        assert!(!is_teaching_language("x = y"));
    }

    #[test]
    fn test_comment_signal_needs_line_start() {
        assert!(is_teaching_language("# note"));
        assert!(is_teaching_language("var a;\n# note"));
        assert!(!is_teaching_language("  #private = 1;"));
    }
}
