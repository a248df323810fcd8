// pipetriage - GPL-3.0-or-later
// This file is part of pipetriage.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// pipetriage is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// pipetriage is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with pipetriage.  If not, see <https://www.gnu.org/licenses/>.

//! Stack trace extraction.
//!
//! A two-state scanner over lines:
//!
//! | state     | line                                   | action                      |
//! |-----------|----------------------------------------|-----------------------------|
//! | any       | contains `Traceback` or `Exception`    | enter `Inside`, not kept    |
//! | `Outside` | anything else                          | skip                        |
//! | `Inside`  | frame line                             | keep (trimmed)              |
//! | `Inside`  | blank, or contains tab / `  at` / `File` | skip                      |
//! | `Inside`  | anything else                          | stop scanning               |
//!
//! A frame line is one whose trimmed text starts with `at ` or `File `, or
//! which contains a tab. Scanning never resumes after a stop, even if more
//! frame lines follow. An empty result is ambiguous: either no trace header
//! was seen or the header was followed directly by a terminating line.

use super::trim_line;

/// Maximum number of frame lines kept
pub const MAX_TRACE_LINES: usize = 10;

const TRACE_HEADERS: [&str; 2] = ["Traceback", "Exception"];

/// Substrings that keep an unrecognized line from ending the trace
const CONTINUATION_MARKERS: [&str; 3] = ["\t", "  at", "File"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TraceState {
    #[default]
    Outside,
    Inside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAction {
    Enter,
    Collect,
    Skip,
    Stop,
}

fn is_trace_header(line: &str) -> bool {
    TRACE_HEADERS.iter().any(|header| line.contains(header))
}

/// Whether `line` looks like a stack frame.
#[must_use]
pub fn is_frame_line(line: &str) -> bool {
    let trimmed = trim_line(line);
    trimmed.starts_with("at ") || trimmed.starts_with("File ") || line.contains('\t')
}

fn next_action(state: TraceState, line: &str) -> LineAction {
    if is_trace_header(line) {
        return LineAction::Enter;
    }
    match state {
        TraceState::Outside => LineAction::Skip,
        TraceState::Inside if is_frame_line(line) => LineAction::Collect,
        TraceState::Inside
            if trim_line(line).is_empty()
                || CONTINUATION_MARKERS.iter().any(|m| line.contains(m)) =>
        {
            LineAction::Skip
        }
        TraceState::Inside => LineAction::Stop,
    }
}

/// Extract up to `max_lines` frame lines of the first trace region, joined by newline.
pub fn extract_stack_trace(content: &str, max_lines: usize) -> String {
    let mut state = TraceState::Outside;
    let mut frames: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if frames.len() >= max_lines {
            break;
        }
        match next_action(state, line) {
            LineAction::Enter => state = TraceState::Inside,
            LineAction::Collect => frames.push(trim_line(line)),
            LineAction::Skip => {}
            LineAction::Stop => {
                tracing::debug!("Stack trace ended at {line:?}");
                break;
            }
        }
    }

    tracing::debug!("Collected {} stack frame(s)", frames.len());
    frames.join("\n")
}
