//! Shared stylesheet for the output panel and console documents.

pub const PANEL_STYLE: &str = "\
.preview-panel { margin-top: 12px; padding: 8px 12px; background: #1e1e1e; color: #d4d4d4; \
font: 13px/1.5 ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; border-radius: 6px; }
.preview-panel:empty { display: none; }
.preview-panel .entry { white-space: pre-wrap; word-break: break-word; }
.preview-panel .entry.error { color: #f48771; }";

pub const CONSOLE_STYLE: &str = "\
html, body { margin: 0; height: 100%; background: #1e1e1e; }
body { padding: 12px; box-sizing: border-box; color: #d4d4d4; \
font: 13px/1.5 ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
.entry { white-space: pre-wrap; word-break: break-word; }
.entry.error { color: #f48771; }
.entry.empty { color: #808080; font-style: italic; }
.label { margin-bottom: 8px; padding: 4px 8px; color: #1e1e1e; background: #f48771; \
border-radius: 4px; font-weight: bold; }";
