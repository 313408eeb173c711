//! Turning a command outcome into what the binary prints.
//!
//! Text mode prints the report, or `error: ...` on stderr. JSON mode always
//! prints to stdout, wrapping the value as `{"ok": ...}` or the error chain as
//! `{"error": "..."}`. Either way a failure exits with status 1.

use serde::Serialize;

use crate::cli::OutputFormat;

/// Final text for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    /// Whether `body` describes a failure (stderr in text mode, exit 1).
    pub failed: bool,
}

impl Rendered {
    pub fn exit_code(&self) -> i32 {
        i32::from(self.failed)
    }
}

/// Pretty-print `val` inside the `ok` envelope.
pub fn json_ok<T: Serialize>(val: &T) -> String {
    #[derive(Serialize)]
    struct Envelope<'a, T: Serialize> {
        ok: &'a T,
    }
    serde_json::to_string_pretty(&Envelope { ok: val }).unwrap_or_else(|e| json_err(&e.into()))
}

/// Error envelope carrying the full `anyhow` context chain.
pub fn json_err(err: &anyhow::Error) -> String {
    serde_json::json!({ "error": format!("{err:#}") }).to_string()
}

/// Render a command outcome for `format`.
///
/// Successful JSON commands already produce their envelope, so `Ok` bodies
/// pass through unchanged in both formats.
pub fn render(format: OutputFormat, outcome: anyhow::Result<String>) -> Rendered {
    match outcome {
        Ok(body) => Rendered { body, failed: false },
        Err(e) => {
            let body = match format {
                OutputFormat::Json => json_err(&e),
                OutputFormat::Text => format!("error: {e:#}"),
            };
            Rendered { body, failed: true }
        }
    }
}
