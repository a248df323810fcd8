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

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::record::RawLog;

/// Reads log files from disk into [`RawLog`]s.
pub struct LogFileLoader;

impl LogFileLoader {
    /// Read a whole log file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// partially corrupt log still yields a record.
    pub fn read(path: &Path) -> Result<RawLog> {
        let read_start = std::time::Instant::now();
        let buffer =
            fs::read(path).with_context(|| format!("Cannot read log file {}", path.display()))?;
        tracing::info!(
            "File I/O took {:?} to read {} bytes from {}",
            read_start.elapsed(),
            buffer.len(),
            path.display()
        );

        let content = String::from_utf8_lossy(&buffer).into_owned();
        Ok(RawLog::new(path.display().to_string(), content))
    }

    /// Expand the given paths into a list of log files.
    ///
    /// Files are kept as given. Directories contribute their direct children
    /// with the given extension, sorted by name. A directory that cannot be
    /// listed is recorded in [`ExpandedInputs::unlisted`] and skipped.
    pub fn expand_inputs(paths: &[PathBuf], extension: &str) -> ExpandedInputs {
        let mut expanded = ExpandedInputs::default();
        for path in paths {
            if !path.is_dir() {
                expanded.files.push(path.clone());
                continue;
            }
            match Self::list_directory(path, extension) {
                Ok(found) => {
                    tracing::info!(
                        "Found {} .{extension} file(s) in {}",
                        found.len(),
                        path.display()
                    );
                    expanded.files.extend(found);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {e:#}", path.display());
                    expanded.unlisted.push((path.clone(), e));
                }
            }
        }
        expanded
    }

    /// Files directly inside `dir` with the given extension, sorted by name.
    pub fn list_directory(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let mut found: Vec<PathBuf> = fs::read_dir(dir)
            .with_context(|| format!("Cannot list directory {}", dir.display()))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
            })
            .collect();
        found.sort();
        Ok(found)
    }
}

/// Result of expanding command-line inputs into log files
#[derive(Debug, Default)]
pub struct ExpandedInputs {
    pub files: Vec<PathBuf>,
    /// Directories that could not be listed, with the reason
    pub unlisted: Vec<(PathBuf, anyhow::Error)>,
}
