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

//! The log-to-record extraction engine.
//!
//! Every extractor is a pure, total function of the raw text plus the shared
//! [`PatternSet`]. None of them can fail: unrecognized input degrades to
//! sentinel or empty values, so a malformed log always yields a usable record.

pub mod error_kind;
pub mod message;
pub mod names;
pub mod patterns;
pub mod service;
pub mod timestamp;
pub mod trace;

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::core::{ErrorRecord, LogFileLoader, RawLog};
use message::MAX_MESSAGE_LINES;
use patterns::PatternSet;
use timestamp::{Clock, SystemClock};
use trace::MAX_TRACE_LINES;

/// Trim a log line for output.
///
/// Besides Unicode whitespace this strips the ASCII separators `\x1c`..`\x1f`,
/// which some runtimes emit at line starts.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Turns raw pipeline logs into [`ErrorRecord`]s.
///
/// Holds no mutable state; one processor can serve any number of threads.
#[derive(Debug, Clone)]
pub struct LogProcessor<C: Clock = SystemClock> {
    patterns: &'static PatternSet,
    clock: C,
}

impl LogProcessor<SystemClock> {
    /// Processor using the built-in pattern tables and the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LogProcessor<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LogProcessor<C> {
    /// Processor using `clock` for the timestamp fallback.
    pub fn with_clock(clock: C) -> Self {
        Self {
            patterns: PatternSet::builtin(),
            clock,
        }
    }

    /// Extract a structured error record from one log.
    pub fn extract(&self, raw: &RawLog) -> ErrorRecord {
        let content = raw.content.as_str();
        let patterns = self.patterns;

        let timestamp = timestamp::extract_timestamp(content, patterns, &self.clock);
        let service = service::identify_service(content, patterns);
        let error_type = error_kind::classify_error(content, patterns);
        let pipeline_name = names::extract_pipeline_name(content, patterns);
        let step_name = names::extract_step_name(content, patterns);
        let error_message = message::extract_error_message(content, MAX_MESSAGE_LINES);
        let stack_trace = trace::extract_stack_trace(content, MAX_TRACE_LINES);

        ErrorRecord {
            file_path: raw.file_path.clone(),
            timestamp: timestamp.text,
            service,
            error_type,
            pipeline_name,
            step_name,
            error_message,
            stack_trace,
            full_content: raw.content.clone(),
            timestamp_format: timestamp.format,
        }
    }

    /// Convenience wrapper around [`Self::extract`] for in-memory text.
    pub fn extract_str(&self, content: &str, file_path: &str) -> ErrorRecord {
        self.extract(&RawLog::new(file_path, content))
    }

    /// Read and extract a single log file.
    pub fn process_log_file(&self, path: &Path) -> Result<ErrorRecord> {
        let raw = LogFileLoader::read(path)?;
        let record = self.extract(&raw);
        tracing::info!(
            "Processed {}: service={} error_type={} pipeline={}",
            record.file_path,
            record.service,
            record.error_type,
            record.pipeline_name
        );
        Ok(record)
    }

    /// Like [`Self::process_log_file`], substituting an empty record when the
    /// file cannot be read.
    pub fn process_log_file_or_empty(&self, path: &Path) -> ErrorRecord {
        self.process_log_file(path).unwrap_or_else(|e| {
            tracing::warn!("Error processing {}: {e:#}", path.display());
            ErrorRecord::empty(path.display().to_string())
        })
    }

    /// Process many files in parallel. Results keep the order of `paths`.
    pub fn process_batch(&self, paths: &[PathBuf]) -> Vec<Result<ErrorRecord>> {
        let start = std::time::Instant::now();
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| self.process_log_file(path))
            .collect();
        tracing::info!("Processed {} file(s) in {:?}", paths.len(), start.elapsed());
        results
    }
}
