//! Severity tag rendering and line assembly

use crate::core::severity::Severity;
use chrono::{DateTime, Local};
use colored::Colorize;
use std::panic::Location;

/// Stamp layout for the leading date/time segment of every line.
pub(crate) const STAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render `"[<TAG>] <message>"`, wrapped in the severity's ANSI color
/// when highlighting is on.
pub fn render(severity: Severity, highlight: bool, message: &str) -> String {
    let tagged = format!("[{}] {}", severity.tag(), sanitize(message));
    if highlight {
        tagged.color(severity.color()).to_string()
    } else {
        tagged
    }
}

/// Escape embedded line breaks and tabs so one emission is always
/// exactly one line in the output file.
fn sanitize(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Assemble the full output line: prefix, wall-clock stamp, call site,
/// rendered body, trailing newline.
pub(crate) fn stamp_line(
    prefix: &str,
    now: DateTime<Local>,
    location: &Location<'_>,
    body: &str,
) -> String {
    format!(
        "{}{} {}:{}: {}\n",
        prefix,
        now.format(STAMP_FORMAT),
        short_file(location.file()),
        location.line(),
        body
    )
}

/// Strip leading directories from a source path, keeping the file name.
fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
