//! Preview document generation.
//!
//! Two kinds of output:
//!
//! - **Sandbox documents** ([`render`]): complete documents pass through;
//!   markup fragments and bare scripts are wrapped in a minimal document with
//!   an output panel and a capture bootstrap. The bootstrap routes console
//!   calls, uncaught errors and exceptions from the guarded run block into the
//!   panel through an explicit `sink.appendEntry(kind, text)` object.
//! - **Console documents** ([`render_console_document`]): the teaching
//!   interpreter's output log as a styled, escaped console view.
//!
//! Every function here only builds a string. Executing the user's code
//! happens later, inside whatever isolated surface loads the document.

pub mod bootstrap;
pub mod console;
pub mod error;
pub mod html;
pub mod sandbox;
mod style;

pub use console::{render_console_document, render_error_document, NO_OUTPUT};
pub use error::{SandboxError, SandboxResult};
pub use html::escape_html;
pub use sandbox::{render, render_with_config, SandboxMode};
