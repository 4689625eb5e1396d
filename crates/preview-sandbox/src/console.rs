//! Styled console documents for teaching-interpreter output.

use crate::html::escape_html;
use crate::style::CONSOLE_STYLE;
use preview_types::{OutputLog, PreviewConfig};

/// Text shown when a run printed nothing.
pub const NO_OUTPUT: &str = "(no output)";

/// Render a completed run's output.
pub fn render_console_document(log: &OutputLog, config: &PreviewConfig) -> String {
    console_document(log, None, config)
}

/// Render a run that ended in a fatal interpreter error.
///
/// Entries produced before the failure are kept, followed by the error.
pub fn render_error_document(log: &OutputLog, message: &str, config: &PreviewConfig) -> String {
    console_document(log, Some(message), config)
}

fn console_document(log: &OutputLog, fatal: Option<&str>, config: &PreviewConfig) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&config.title)));
    out.push_str(&format!("<style>\n{CONSOLE_STYLE}\n</style>\n"));
    out.push_str("</head>\n<body>\n");
    if fatal.is_some() {
        out.push_str("<div class=\"label\">Error</div>\n");
    }
    out.push_str(&format!(
        "<div id=\"{}\" class=\"console\">\n",
        escape_html(&config.panel_id)
    ));
    for entry in log.entries() {
        out.push_str(&format!(
            "<div class=\"entry {}\">{}</div>\n",
            entry.kind.as_str(),
            escape_html(&entry.text)
        ));
    }
    match fatal {
        Some(message) => out.push_str(&format!(
            "<div class=\"entry error\">{}</div>\n",
            escape_html(message)
        )),
        None if log.is_empty() => {
            out.push_str(&format!("<div class=\"entry empty\">{NO_OUTPUT}</div>\n"))
        }
        None => {}
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use preview_types::OutputEntry;

    #[test]
    fn test_entries_in_order() {
        let log = OutputLog::from(vec![OutputEntry::info("one"), OutputEntry::info("two")]);
        let doc = render_console_document(&log, &PreviewConfig::default());
        let one = doc.find(">one<").unwrap();
        let two = doc.find(">two<").unwrap();
        assert!(one < two);
        assert!(!doc.contains(NO_OUTPUT));
    }

    #[test]
    fn test_empty_log_shows_notice() {
        let doc = render_console_document(&OutputLog::new(), &PreviewConfig::default());
        assert!(doc.contains("<div class=\"entry empty\">(no output)</div>"));
    }

    #[test]
    fn test_error_document_is_labelled() {
        let doc = render_error_document(&OutputLog::new(), "gas exhausted", &PreviewConfig::default());
        assert!(doc.contains("<div class=\"label\">Error</div>"));
        assert!(doc.contains("<div class=\"entry error\">gas exhausted</div>"));
        assert!(!doc.contains(NO_OUTPUT));
    }
}
