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

//! Timestamp extraction across the source-specific formats.
//!
//! The matched text is returned verbatim; no timezone or format
//! normalization happens here. When no format matches, the injected
//! [`Clock`] supplies the extraction time instead.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::patterns::PatternSet;

/// Format used when the clock fallback supplies the timestamp
pub const FALLBACK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layouts recognized in pipeline logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `[2025-01-15 14:23:45,123]` (Airflow)
    Bracketed,
    /// `2025-01-15 14:23:45,123` (EMR / log4j)
    Unbracketed,
    /// `[ERROR] 2025-01-15T14:23:45.123Z` (Lambda)
    IsoAfterErrorTag,
    /// `01/15/25 14:23:45` (Databricks)
    ShortYear,
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bracketed => "bracketed",
            Self::Unbracketed => "unbracketed",
            Self::IsoAfterErrorTag => "iso-after-error-tag",
            Self::ShortYear => "short-year",
        };
        f.write_str(name)
    }
}

pub(crate) const TIMESTAMP_PATTERNS: &[(TimestampFormat, &str)] = &[
    (
        TimestampFormat::Bracketed,
        r"\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}),\d+\]",
    ),
    (
        TimestampFormat::Unbracketed,
        r"(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}),\d+",
    ),
    (
        TimestampFormat::IsoAfterErrorTag,
        r"\[ERROR\] (\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d+Z)",
    ),
    (
        TimestampFormat::ShortYear,
        r"(\d{2}/\d{2}/\d{2} \d{2}:\d{2}:\d{2})",
    ),
];

/// Source of "now" for the timestamp fallback
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A timestamp found in (or substituted for) a log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTimestamp {
    pub text: String,
    /// The matched layout, or `None` when the clock fallback was used
    pub format: Option<TimestampFormat>,
}

impl ExtractedTimestamp {
    /// Whether the timestamp was read from the log rather than the clock
    #[must_use]
    pub const fn is_observed(&self) -> bool {
        self.format.is_some()
    }
}

/// Extract the first timestamp in `content`, trying formats in declaration order.
pub fn extract_timestamp(
    content: &str,
    patterns: &PatternSet,
    clock: &dyn Clock,
) -> ExtractedTimestamp {
    if let Some((format, text)) = patterns.timestamps.first_capture(content) {
        tracing::debug!("Found {format} timestamp {text}");
        return ExtractedTimestamp {
            text: text.to_string(),
            format: Some(format),
        };
    }

    let text = clock.now().format(FALLBACK_FORMAT).to_string();
    tracing::debug!("No timestamp in log, falling back to extraction time {text}");
    ExtractedTimestamp { text, format: None }
}
