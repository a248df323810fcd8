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

//! Rendering error records for the terminal and for downstream tools.

use std::io::Write;

use anyhow::{Context, Result};

use super::record::ErrorRecord;
use crate::config::OutputFormat;

/// Human-readable block for one record
#[must_use]
pub fn render_summary(record: &ErrorRecord) -> String {
    let origin = if record.timestamp_is_observed() {
        "from log"
    } else {
        "extraction time"
    };
    let mut out = format!(
        "== {} ==\n\
         Service:    {} ({})\n\
         Pipeline:   {}\n\
         Step:       {}\n\
         Error Type: {}\n\
         Timestamp:  {} ({origin})\n",
        record.file_path,
        record.service,
        record.service.platform(),
        record.pipeline_name,
        record.step_name,
        record.error_type,
        record.timestamp,
    );
    if !record.error_message.is_empty() {
        out.push_str("Error Message:\n");
        for line in record.error_message.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    if !record.stack_trace.is_empty() {
        out.push_str("Stack Trace:\n");
        for line in record.stack_trace.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

/// Write records in the requested format.
///
/// `Json` emits one object per line, `Pretty` an indented array.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[ErrorRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for record in records {
                let line = serde_json::to_string(record).context("Failed to serialize record")?;
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Pretty => {
            let json =
                serde_json::to_string_pretty(records).context("Failed to serialize records")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Summary => {
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", render_summary(record))?;
            }
        }
    }
    Ok(())
}
