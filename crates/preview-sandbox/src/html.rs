//! Escaping helpers for text placed into generated documents.

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Encode text as a JavaScript string literal that is safe inside a
/// `<script>` element.
///
/// The JSON encoding handles quotes, backslashes and control characters;
/// `</` and `<!--` are broken up so the HTML parser cannot end the element
/// early.
pub fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_owned())
        .to_string()
        .replace("</", "<\\/")
        .replace("<!--", "\\u003c!--")
}
