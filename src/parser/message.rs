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

//! Error message extraction: the first few error-indicative lines.

use super::trim_line;

/// Markers checked against the upper-cased line
const ERROR_MARKERS: [&str; 3] = ["ERROR", "EXCEPTION", "FAILED"];

/// Maximum number of lines kept in an error message
pub const MAX_MESSAGE_LINES: usize = 3;

/// Whether a line reads as an error line (case-insensitive marker match).
#[must_use]
pub fn is_error_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    ERROR_MARKERS.iter().any(|marker| upper.contains(marker))
}

/// Collect up to `max_lines` error lines, trimmed, in file order.
///
/// Returns an empty string when no line qualifies.
pub fn extract_error_message(content: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = content
        .split('\n')
        .filter(|line| is_error_line(line))
        .map(trim_line)
        .take(max_lines)
        .collect();
    tracing::debug!("Collected {} error line(s)", lines.len());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_case_insensitive() {
        assert!(is_error_line("psycopg2.OperationalError: connection failed"));
        assert!(is_error_line("Task exited with state: failed"));
        assert!(is_error_line("java.lang.NullPointerException"));
        assert!(!is_error_line("INFO - Starting attempt 1 of 1"));
    }

    #[test]
    fn test_first_three_lines_in_order() {
        let content = "INFO start\n  ERROR one  \nok\nException two\nFAILED three\nERROR four\n";
        assert_eq!(
            extract_error_message(content, MAX_MESSAGE_LINES),
            "ERROR one\nException two\nFAILED three"
        );
    }

    #[test]
    fn test_fewer_than_limit() {
        assert_eq!(
            extract_error_message("ok\nERROR only\nok", MAX_MESSAGE_LINES),
            "ERROR only"
        );
    }

    #[test]
    fn test_no_error_lines() {
        assert_eq!(extract_error_message("", MAX_MESSAGE_LINES), "");
        assert_eq!(extract_error_message("INFO a\nINFO b", MAX_MESSAGE_LINES), "");
    }

    #[test]
    fn test_never_exceeds_limit() {
        let content = "ERROR\n".repeat(50);
        let message = extract_error_message(&content, MAX_MESSAGE_LINES);
        assert_eq!(message.lines().count(), MAX_MESSAGE_LINES);
    }

    #[test]
    fn test_separator_characters_are_trimmed() {
        assert_eq!(
            extract_error_message("\x1cERROR a\x1f\n\x1e FAILED b", MAX_MESSAGE_LINES),
            "ERROR a\nFAILED b"
        );
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        assert_eq!(
            extract_error_message("ERROR a\r\nERROR b\r\n", MAX_MESSAGE_LINES),
            "ERROR a\nERROR b"
        );
    }
}
