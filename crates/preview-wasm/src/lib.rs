//! Lesson preview engine as a WASM module for browser environments.
//!
//! The host UI passes the editor text on every "Run" and assigns the returned
//! document to a sandboxed frame's `srcdoc`.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { render_preview, run_preview } from 'preview-wasm';
//!
//! await init();
//!
//! frame.srcdoc = render_preview(editor.value);
//!
//! const result = JSON.parse(run_preview(editor.value, '{"title": "Lesson 3"}'));
//! // { source_hash: "9f86…", kind: "teaching_language", document: "<!DOCTYPE html>…",
//! //   entries: [{ kind: "info", text: "Hello" }], fatal: null,
//! //   diagnostics: { items: [], total: 0 } }
//! ```

use preview_engine::{classify, config_or_default, preview, run, PreviewResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Render `source` with the default configuration and return the document.
#[wasm_bindgen]
pub fn render_preview(source: &str) -> String {
    run(source).document
}

/// Run the full pipeline and return a JSON `PreviewResult`.
///
/// `config_json` may set any of `gas_limit`, `max_output_entries`,
/// `panel_id` and `title`. An empty or invalid config means the defaults.
#[wasm_bindgen]
pub fn run_preview(source: &str, config_json: &str) -> String {
    let result = run_result(source, config_json);
    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!(
            r#"{{"source_hash":"","kind":"script_only","document":"","entries":[],"fatal":"Serialization error: {}","diagnostics":{{"items":[],"total":0}}}}"#,
            e
        )
    })
}

/// Same as [`run_preview`] but returns a JavaScript object.
#[wasm_bindgen]
pub fn run_preview_object(source: &str, config_json: &str) -> Result<JsValue, JsValue> {
    let result = run_result(source, config_json);
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Classify `source` without rendering it.
///
/// Returns one of `full_document`, `markup_fragment`, `script_only`,
/// `teaching_language`.
#[wasm_bindgen]
pub fn classify_source(source: &str) -> String {
    classify(source).as_str().to_string()
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn run_result(source: &str, config_json: &str) -> PreviewResult {
    let config = if config_json.trim().is_empty() {
        preview_types::PreviewConfig::default()
    } else {
        config_or_default(config_json)
    };
    preview(source, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preview_json() {
        let json = run_preview("print('hi')", "");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "teaching_language");
        assert_eq!(value["entries"][0]["text"], "hi");
    }

    #[test]
    fn test_invalid_config_uses_defaults() {
        let json = run_preview("print('hi')", "{oops");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["fatal"].is_null());
        assert!(value["document"]
            .as_str()
            .unwrap()
            .contains("<title>Preview</title>"));
    }

    #[test]
    fn test_config_is_applied() {
        let json = run_preview("print(1)\nprint(2)", r#"{"max_output_entries": 1}"#);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fatal"], "output limit of 1 entries exceeded");
    }

    #[test]
    fn test_diagnostics_in_json() {
        let json = run_preview("print('unterminated)", "");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["diagnostics"]["items"][0]["code"], 101);
    }

    #[test]
    fn test_classify_source() {
        assert_eq!(classify_source("<p>x</p>"), "markup_fragment");
        assert_eq!(classify_source(""), "script_only");
    }

    #[test]
    fn test_render_preview_passthrough() {
        let doc = "<!DOCTYPE html><html></html>";
        assert_eq!(render_preview(doc), doc);
    }
}
