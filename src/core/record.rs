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

//! Raw log input and the structured error record produced from it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::parser::error_kind::ErrorKind;
use crate::parser::names::{UNKNOWN_PIPELINE, UNKNOWN_STEP};
use crate::parser::service::Service;
use crate::parser::timestamp::TimestampFormat;

/// Field names of a serialized record, in output order
pub const RECORD_FIELDS: [&str; 9] = [
    "file_path",
    "timestamp",
    "service",
    "error_type",
    "pipeline_name",
    "step_name",
    "error_message",
    "stack_trace",
    "full_content",
];

/// The full text of one log plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    pub file_path: String,
    pub content: String,
}

impl RawLog {
    pub fn new(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            content: content.into(),
        }
    }
}

/// Structured description of one pipeline failure.
///
/// Unresolved fields carry sentinels (`unknown`, `unknown_error`,
/// `unknown_pipeline`, `unknown_step`) or an empty string for the message and
/// trace. Consumers must treat these as "not found", never as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub file_path: String,
    pub timestamp: String,
    pub service: Service,
    pub error_type: ErrorKind,
    pub pipeline_name: String,
    pub step_name: String,
    pub error_message: String,
    pub stack_trace: String,
    pub full_content: String,
    /// Layout the timestamp was read in; `None` means it is the extraction time
    #[serde(skip)]
    pub timestamp_format: Option<TimestampFormat>,
}

impl ErrorRecord {
    /// Record substituted when a log could not be read at all.
    pub fn empty(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            timestamp: String::new(),
            service: Service::Unknown,
            error_type: ErrorKind::Unknown,
            pipeline_name: UNKNOWN_PIPELINE.to_string(),
            step_name: UNKNOWN_STEP.to_string(),
            error_message: String::new(),
            stack_trace: String::new(),
            full_content: String::new(),
            timestamp_format: None,
        }
    }

    /// Whether the timestamp came from the log text rather than the clock fallback
    #[must_use]
    pub const fn timestamp_is_observed(&self) -> bool {
        self.timestamp_format.is_some()
    }

    /// Key/value view with the field names downstream consumers expect.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<&'static str, String> {
        let values = [
            self.file_path.clone(),
            self.timestamp.clone(),
            self.service.as_str().to_string(),
            self.error_type.as_str().to_string(),
            self.pipeline_name.clone(),
            self.step_name.clone(),
            self.error_message.clone(),
            self.stack_trace.clone(),
            self.full_content.clone(),
        ];
        RECORD_FIELDS.into_iter().zip(values).collect()
    }

    /// Drop the retained log text, e.g. before emitting many records.
    pub fn without_content(mut self) -> Self {
        self.full_content.clear();
        self
    }
}
