//! End-to-end pipeline tests: classification, routing, interpreter output,
//! sandbox containment, failure documents and determinism.

use preview_engine::{
    classify, config_or_default, preview, run, run_with_config, DetectedKind, DiagnosticCode,
    PreviewConfig,
};
use preview_eval::{evaluate_into, EvalError};
use preview_sandbox::render_error_document;
use preview_types::{EntryKind, OutputLog, Sink};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn texts(source: &str) -> Vec<String> {
    let rendered = run(source);
    assert_eq!(rendered.kind, DetectedKind::TeachingLanguage);
    assert!(!rendered.is_error(), "unexpected failure: {:?}", rendered.fatal);
    rendered.entries.into_iter().map(|e| e.text).collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Dispatcher
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn print_call_is_teaching_language() {
    assert_eq!(classify("print(\"Hello\")"), DetectedKind::TeachingLanguage);
    assert_eq!(classify("x = 3\nprint(x)"), DetectedKind::TeachingLanguage);
}

#[test]
fn other_teaching_signals() {
    for source in ["def greet():", "import math", "# comment", "name = \"Ada\"", "ok = True"] {
        assert_eq!(classify(source), DetectedKind::TeachingLanguage, "{source:?}");
    }
}

#[test]
fn document_markers() {
    assert_eq!(
        classify("<!DOCTYPE html><html><body></body></html>"),
        DetectedKind::FullDocument
    );
    assert_eq!(classify("  <html>\n</html>"), DetectedKind::FullDocument);
}

#[test]
fn tags_are_markup() {
    assert_eq!(classify("<p>Hello</p>"), DetectedKind::MarkupFragment);
    assert_eq!(classify("<br/>"), DetectedKind::MarkupFragment);
    assert_eq!(
        classify("<div class=\"x\">\n  <span>hi</span>\n</div>"),
        DetectedKind::MarkupFragment
    );
}

#[test]
fn markup_wins_over_teaching_signals() {
    assert_eq!(
        classify("<p>print(\"hi\")</p>\n# heading"),
        DetectedKind::MarkupFragment
    );
}

#[test]
fn everything_else_is_script() {
    assert_eq!(classify("console.log('hi');"), DetectedKind::ScriptOnly);
    assert_eq!(classify("let x = 5;\nalert(x);"), DetectedKind::ScriptOnly);
}

#[test]
fn empty_input_is_script() {
    assert_eq!(classify(""), DetectedKind::ScriptOnly);
    assert_eq!(classify("  \n\t "), DetectedKind::ScriptOnly);
}

// ══════════════════════════════════════════════════════════════════════════════
// Teaching interpreter path
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn assignment_then_print() {
    assert_eq!(texts("name = \"Alice\"\nprint(name)"), vec!["Alice"]);
}

#[test]
fn interpolation() {
    assert_eq!(texts("age = 5\nprint(f\"Age: {age}\")"), vec!["Age: 5"]);
}

#[test]
fn multi_argument_join() {
    assert_eq!(texts("x = 1\nprint(\"x is\", x)"), vec!["x is 1"]);
}

#[test]
fn unbound_interpolation_verbatim() {
    assert_eq!(texts("print(f\"Hi {missing}\")"), vec!["Hi {missing}"]);
}

#[test]
fn unsupported_line_is_dropped_without_failure() {
    assert_eq!(texts("if True:\nprint('in')"), vec!["in"]);
    assert!(texts("if True:").is_empty());
}

#[test]
fn interpreter_document_shows_escaped_output() {
    let rendered = run("print(\"<b>hi</b>\")");
    assert!(rendered.document.contains("&lt;b&gt;hi&lt;/b&gt;"));
    assert!(rendered.document.starts_with("<!DOCTYPE html>"));
}

#[test]
fn interpreter_document_with_no_output() {
    let rendered = run("# nothing printed\nx = 1");
    assert!(rendered.entries.is_empty());
    assert!(rendered.document.contains("(no output)"));
}

#[test]
fn idempotent_runs() {
    let source = "a = [1, 'b']\nprint(a)\nprint(f\"{a}!\")";
    let first = run(source);
    let second = run(source);
    assert_eq!(first.entries, second.entries);
    assert_eq!(first.document, second.document);
}

// ══════════════════════════════════════════════════════════════════════════════
// Failure documents
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn gas_exhaustion_becomes_error_document() {
    init_tracing();
    let config = PreviewConfig::default().with_gas_limit(2);
    let rendered = run_with_config("print(1)\nprint(2)\nprint(3)", &config);
    assert_eq!(rendered.kind, DetectedKind::TeachingLanguage);
    assert_eq!(rendered.fatal.as_deref(), Some("gas exhausted after 2 steps"));
    let texts: Vec<_> = rendered.entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["1", "2"]);
    assert!(rendered.document.contains("class=\"label\""));
    assert!(rendered.document.contains("gas exhausted after 2 steps"));
}

#[test]
fn output_limit_becomes_error_document() {
    let config = PreviewConfig::default().with_max_output_entries(1);
    let rendered = run_with_config("print(1)\nprint(2)", &config);
    assert!(rendered.is_error());
    assert_eq!(rendered.entries.len(), 1);
}

#[test]
fn malformed_input_never_fails() {
    init_tracing();
    for source in [
        "print(",
        "x = [[[[",
        "x = \"unterminated\nprint(x)",
        "print(f\"{\")",
        "λ = 1\nprint(λ)",
        "=\n==\n= = =",
        "print)(",
    ] {
        let rendered = run(source);
        assert!(!rendered.document.is_empty(), "{source:?}");
        assert!(!rendered.is_error(), "{source:?}: {:?}", rendered.fatal);
    }
}

#[test]
fn internal_failure_message_reaches_the_error_document() {
    struct ExplodingSink;
    impl Sink for ExplodingSink {
        fn append_entry(&mut self, _kind: EntryKind, _text: String) {
            panic!("sink exploded");
        }
    }

    init_tracing();
    let config = PreviewConfig::default();
    let err = evaluate_into("print(1)", &mut ExplodingSink, &config)
        .result
        .unwrap_err();
    assert_eq!(err, EvalError::Internal("sink exploded".into()));

    let document = render_error_document(&OutputLog::new(), &err.to_string(), &config);
    assert!(document.contains("<div class=\"label\">Error</div>"));
    assert!(document.contains("internal interpreter error: sink exploded"));
}

// ══════════════════════════════════════════════════════════════════════════════
// Diagnostics
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn interpreter_diagnostics_are_reported() {
    let rendered = run("xs = [a, b]\nprint(\"oops)\nprint(xs)");
    assert_eq!(rendered.kind, DetectedKind::TeachingLanguage);
    assert!(!rendered.is_error());
    assert!(rendered.diagnostics.has_code(DiagnosticCode::UNTERMINATED_STRING));
    assert!(rendered.diagnostics.has_code(DiagnosticCode::LITERAL_FALLBACK));
}

#[test]
fn diagnostics_are_serialised() {
    let result = preview("print(\"oops)", &PreviewConfig::default());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["diagnostics"]["total"], 1);
    assert_eq!(json["diagnostics"]["items"][0]["code"], 101);
    assert_eq!(json["diagnostics"]["items"][0]["category"], "lexical");
}

#[test]
fn sandboxed_kinds_have_no_diagnostics() {
    assert!(run("<p>\"oops</p>").diagnostics.is_empty());
}

// ══════════════════════════════════════════════════════════════════════════════
// Sandbox path
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn full_document_passes_through() {
    let source = "<!DOCTYPE html>\n<html><body>hi</body></html>";
    let rendered = run(source);
    assert_eq!(rendered.kind, DetectedKind::FullDocument);
    assert_eq!(rendered.document, source);
    assert!(rendered.entries.is_empty());
}

#[test]
fn throwing_script_is_contained() {
    let rendered = run("throw new Error(\"x\")");
    assert_eq!(rendered.kind, DetectedKind::ScriptOnly);
    assert!(!rendered.is_error());
    assert!(rendered.document.contains(r#""throw new Error(\"x\")""#));
    assert!(rendered.document.contains("catch (err)"));
    assert!(rendered.document.contains("sink.appendEntry('error'"));
}

#[test]
fn fragment_is_wrapped() {
    let rendered = run("<h1>Hi</h1>");
    assert_eq!(rendered.kind, DetectedKind::MarkupFragment);
    assert!(rendered.document.contains("<body>\n<h1>Hi</h1>\n<div id=\"preview-output\""));
}

// ══════════════════════════════════════════════════════════════════════════════
// Host-facing result and config
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn preview_result_serialises_with_hash() {
    let result = preview("print('a')", &PreviewConfig::default());
    assert_eq!(result.source_hash.len(), 64);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["kind"], "teaching_language");
    assert_eq!(json["entries"][0]["kind"], "info");
    assert_eq!(json["entries"][0]["text"], "a");
    assert!(json["fatal"].is_null());
    assert_eq!(json["source_hash"], result.source_hash.as_str());
}

#[test]
fn same_source_same_hash() {
    let config = PreviewConfig::default();
    assert_eq!(
        preview("x = 1", &config).source_hash,
        preview("x = 1", &config).source_hash
    );
    assert_ne!(
        preview("x = 1", &config).source_hash,
        preview("x = 2", &config).source_hash
    );
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    init_tracing();
    assert_eq!(config_or_default("not json"), PreviewConfig::default());
    assert_eq!(config_or_default(r#"{"title": "T"}"#).title, "T");
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn pipeline_determinism_100_iterations() {
    let sources = [
        "name = 'Ada'\nprint(f\"Hi {name}\", [1, True])",
        "console.log('x'); throw 'y';",
        "<p>hi</p><script>console.error('e')</script>",
        "<!DOCTYPE html><html></html>",
    ];
    for source in sources {
        let first = preview(source, &PreviewConfig::default());
        for i in 0..100 {
            assert_eq!(
                first,
                preview(source, &PreviewConfig::default()),
                "Determinism failure at iteration {i} for {source:?}"
            );
        }
    }
}
