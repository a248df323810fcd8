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

//! Error classification into a closed set of failure categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::patterns::PatternSet;

/// Canonical failure category of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConnectionTimeout,
    MemoryError,
    PermissionDenied,
    FileNotFound,
    SqlError,
    NetworkError,
    #[default]
    #[serde(rename = "unknown_error")]
    Unknown,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConnectionTimeout => "connection_timeout",
            Self::MemoryError => "memory_error",
            Self::PermissionDenied => "permission_denied",
            Self::FileNotFound => "file_not_found",
            Self::SqlError => "sql_error",
            Self::NetworkError => "network_error",
            Self::Unknown => "unknown_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicative phrasing per category, in evaluation order. Matched case-insensitively.
pub(crate) const ERROR_SIGNATURES: &[(ErrorKind, &str)] = &[
    (
        ErrorKind::ConnectionTimeout,
        r"connection.*timeout|timed out|Connection timed out",
    ),
    (
        ErrorKind::MemoryError,
        r"OutOfMemoryError|Java heap space|memory.*exceeded",
    ),
    (
        ErrorKind::PermissionDenied,
        r"AccessDenied|permission.*denied|not authorized",
    ),
    (
        ErrorKind::FileNotFound,
        r"FileNotFoundException|No such file|does not exist",
    ),
    (
        ErrorKind::SqlError,
        r"SQLException|syntax error|PARSE_SYNTAX_ERROR",
    ),
    (
        ErrorKind::NetworkError,
        r"NetworkException|connection refused|Connection refused",
    ),
];

/// Classify the failure described by `content`.
pub fn classify_error(content: &str, patterns: &PatternSet) -> ErrorKind {
    let kind = patterns.errors.first_match(content).unwrap_or_default();
    tracing::debug!("Classified error: {kind}");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(content: &str) -> ErrorKind {
        classify_error(content, PatternSet::builtin())
    }

    #[test]
    fn test_each_category() {
        assert_eq!(
            classify("port 5432 failed: Connection timed out"),
            ErrorKind::ConnectionTimeout
        );
        assert_eq!(
            classify("java.lang.OutOfMemoryError: Java heap space"),
            ErrorKind::MemoryError
        );
        assert_eq!(
            classify("User is not authorized to perform: s3:GetObject"),
            ErrorKind::PermissionDenied
        );
        assert_eq!(
            classify("java.io.FileNotFoundException: s3://bucket/key"),
            ErrorKind::FileNotFound
        );
        assert_eq!(
            classify("[PARSE_SYNTAX_ERROR] Syntax error at or near 'FORM'"),
            ErrorKind::SqlError
        );
        assert_eq!(
            classify("dial tcp 10.0.0.3:9092: connect: connection refused"),
            ErrorKind::NetworkError
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("REQUEST TIMED OUT"), ErrorKind::ConnectionTimeout);
        assert_eq!(classify("accessdenied"), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // Both a timeout and a refused connection; timeout is declared first.
        assert_eq!(
            classify("Connection refused after retry; request timed out"),
            ErrorKind::ConnectionTimeout
        );
        // Memory beats SQL.
        assert_eq!(
            classify("SQLException caused by OutOfMemoryError"),
            ErrorKind::MemoryError
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify(""), ErrorKind::Unknown);
        assert_eq!(classify("ERROR something odd happened"), ErrorKind::Unknown);
        assert_eq!(ErrorKind::Unknown.as_str(), "unknown_error");
        assert_eq!(
            serde_json::to_string(&ErrorKind::Unknown).expect("serializes"),
            "\"unknown_error\""
        );
    }
}
