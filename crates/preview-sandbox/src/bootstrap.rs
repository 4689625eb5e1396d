//! Capture bootstrap injected into sandboxed documents.
//!
//! The bootstrap defines an explicit `sink` object with
//! `appendEntry(kind, text)`. Console forwarders, the uncaught-error hook and
//! the guarded run block all write through it. Forwarders call the native
//! console function afterwards so developer tools still see every message.
//!
//! Only synchronous exceptions and errors reaching the global `error` event
//! are captured. Unhandled promise rejections are not.

use crate::html::js_string;

/// Global name under which the sink is published for the guarded run block.
pub const SINK_GLOBAL: &str = "__previewSink";

const SINK_GLOBAL_SLOT: &str = "__SINK_GLOBAL__";
const PANEL_ID_SLOT: &str = "__PANEL_ID__";
const SOURCE_SLOT: &str = "__SOURCE__";

const BOOTSTRAP_TEMPLATE: &str = r#"(function () {
  var panelId = __PANEL_ID__;
  var pending = [];
  function show(host, entry) {
    var line = document.createElement('div');
    line.className = 'entry ' + entry.kind;
    line.textContent = entry.text;
    host.appendChild(line);
  }
  function draw(entry) {
    var host = document.getElementById(panelId);
    if (!host) { pending.push(entry); return; }
    while (pending.length) { show(host, pending.shift()); }
    if (entry) { show(host, entry); }
  }
  function format(args) {
    return Array.prototype.map.call(args, function (arg) {
      if (typeof arg === 'string') { return arg; }
      if (arg instanceof Error) { return arg.name + ': ' + arg.message; }
      try {
        var json = JSON.stringify(arg);
        return json === undefined ? String(arg) : json;
      } catch (err) {
        return String(arg);
      }
    }).join(' ');
  }
  var sink = {
    appendEntry: function (kind, text) {
      draw({ kind: kind === 'error' ? 'error' : 'info', text: String(text) });
    }
  };
  window.__SINK_GLOBAL__ = sink;
  var levels = { log: 'info', info: 'info', debug: 'info', warn: 'error', error: 'error' };
  Object.keys(levels).forEach(function (name) {
    var native = console[name];
    console[name] = function () {
      sink.appendEntry(levels[name], format(arguments));
      if (native) { native.apply(console, arguments); }
    };
  });
  window.addEventListener('error', function (event) {
    sink.appendEntry('error', event.message || String(event.error));
  });
  document.addEventListener('DOMContentLoaded', function () { draw(null); });
})();"#;

const GUARDED_RUN_TEMPLATE: &str = r#"(function (sink, source) {
  try {
    (0, eval)(source);
  } catch (err) {
    sink.appendEntry('error', err && err.name ? err.name + ': ' + err.message : String(err));
  }
})(window.__SINK_GLOBAL__, __SOURCE__);"#;

/// The bootstrap script body for a panel with element id `panel_id`.
pub fn bootstrap_script(panel_id: &str) -> String {
    BOOTSTRAP_TEMPLATE
        .replace(SINK_GLOBAL_SLOT, SINK_GLOBAL)
        .replace(PANEL_ID_SLOT, &js_string(panel_id))
}

/// A script body that runs `source` through indirect `eval` and reports any
/// thrown value, syntax errors included, as an error entry.
pub fn guarded_run_script(source: &str) -> String {
    GUARDED_RUN_TEMPLATE
        .replace(SINK_GLOBAL_SLOT, SINK_GLOBAL)
        .replace(SOURCE_SLOT, &js_string(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_embeds_panel_id() {
        let script = bootstrap_script("out");
        assert!(script.contains(r#"var panelId = "out";"#));
        assert!(!script.contains(PANEL_ID_SLOT));
        assert!(script.contains(SINK_GLOBAL));
    }

    #[test]
    fn test_sink_global_shared_by_both_scripts() {
        let published = format!("window.{SINK_GLOBAL} = sink;");
        let consumed = format!("(window.{SINK_GLOBAL}, ");
        assert!(bootstrap_script("out").contains(&published));
        assert!(guarded_run_script("1").contains(&consumed));
        assert!(!bootstrap_script("out").contains(SINK_GLOBAL_SLOT));
        assert!(!guarded_run_script("1").contains(SINK_GLOBAL_SLOT));
    }

    #[test]
    fn test_source_text_is_not_treated_as_a_slot() {
        let script = guarded_run_script("var s = '__SINK_GLOBAL__';");
        assert!(script.contains(r#""var s = '__SINK_GLOBAL__';""#));
    }

    #[test]
    fn test_forwarders_call_native_after_appending() {
        let script = bootstrap_script("out");
        let append = script.find("sink.appendEntry(levels[name]").unwrap();
        let native = script.find("native.apply(console, arguments)").unwrap();
        assert!(append < native);
    }

    #[test]
    fn test_guarded_run_embeds_source_once() {
        let script = guarded_run_script("throw new Error(\"x\")");
        assert!(script.contains(r#""throw new Error(\"x\")""#));
        assert!(script.contains("try {"));
        assert!(script.contains("catch (err)"));
        assert!(!script.contains(SOURCE_SLOT));
    }

    #[test]
    fn test_source_cannot_close_script_element() {
        let script = guarded_run_script("console.log('</script><b>')");
        assert!(!script.contains("</script>"));
    }
}
