//! Diagnostics
//!
//! Recent log records, callable from the browser devtools as
//! `wasmBindings.recentLogs()`.

use console_logger::LogLine;
use wasm_bindgen::prelude::*;

/// Buffered log records, one per line, oldest first
#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> String {
    render_lines(&console_logger::recent())
}

fn render_lines(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
