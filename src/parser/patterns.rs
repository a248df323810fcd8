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

//! Ordered pattern cascades and the process-wide pattern tables.
//!
//! Every classifier and field extractor in this crate is a cascade: an
//! ordered list of `(label, matcher)` pairs evaluated left to right where the
//! first hit wins. Declaration order is therefore the tie-break whenever a
//! log matches more than one entry.

use std::sync::LazyLock;

use fancy_regex::{Captures, Regex};

use super::error_kind::{ErrorKind, ERROR_SIGNATURES};
use super::names::{PIPELINE_NAME_PATTERNS, STEP_NAME_PATTERNS};
use super::service::{Service, SERVICE_SIGNATURES};
use super::timestamp::{TimestampFormat, TIMESTAMP_PATTERNS};

static BUILTIN: LazyLock<PatternSet> = LazyLock::new(PatternSet::compile);

/// An ordered list of labeled regular expressions.
#[derive(Debug, Clone)]
pub struct PatternCascade<L> {
    entries: Vec<(L, Regex)>,
}

impl<L: Copy> PatternCascade<L> {
    /// Compile a cascade from pattern literals.
    ///
    /// The patterns are compile-time constants, so an invalid one is a
    /// programming error rather than a runtime condition.
    pub fn from_literals(entries: &[(L, &str)], case_insensitive: bool) -> Self {
        let entries = entries
            .iter()
            .map(|&(label, pattern)| {
                let source = if case_insensitive {
                    format!("(?i){pattern}")
                } else {
                    pattern.to_string()
                };
                (label, Regex::new(&source).expect("valid regex literal"))
            })
            .collect();
        Self { entries }
    }

    /// Label of the first entry matching anywhere in `text`.
    pub fn first_match(&self, text: &str) -> Option<L> {
        self.entries
            .iter()
            .find(|(_, regex)| is_match(regex, text))
            .map(|&(label, _)| label)
    }

    /// Label and first capture group of the first entry that captures in `text`.
    pub fn first_capture<'t>(&self, text: &'t str) -> Option<(L, &'t str)> {
        self.entries.iter().find_map(|(label, regex)| {
            captures(regex, text)
                .and_then(|caps| caps.get(1))
                .map(|group| (*label, group.as_str()))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// A matcher that gives up (backtrack limit) counts as a miss so extraction
// stays total over arbitrary input.
fn is_match(regex: &Regex, text: &str) -> bool {
    match regex.is_match(text) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::warn!("Pattern {} aborted during matching: {e}", regex.as_str());
            false
        }
    }
}

fn captures<'t>(regex: &Regex, text: &'t str) -> Option<Captures<'t>> {
    match regex.captures(text) {
        Ok(caps) => caps,
        Err(e) => {
            tracing::warn!("Pattern {} aborted during capture: {e}", regex.as_str());
            None
        }
    }
}

/// All pattern tables used by the extraction engine.
///
/// Built once and shared read-only; see [`PatternSet::builtin`].
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub services: PatternCascade<Service>,
    pub errors: PatternCascade<ErrorKind>,
    pub timestamps: PatternCascade<TimestampFormat>,
    pub pipeline_names: PatternCascade<&'static str>,
    pub step_names: PatternCascade<&'static str>,
}

impl PatternSet {
    /// The built-in tables, compiled on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    fn compile() -> Self {
        let set = Self {
            services: PatternCascade::from_literals(SERVICE_SIGNATURES, true),
            errors: PatternCascade::from_literals(ERROR_SIGNATURES, true),
            timestamps: PatternCascade::from_literals(TIMESTAMP_PATTERNS, false),
            pipeline_names: PatternCascade::from_literals(PIPELINE_NAME_PATTERNS, false),
            step_names: PatternCascade::from_literals(STEP_NAME_PATTERNS, false),
        };
        tracing::debug!(
            "Compiled pattern tables: {} services, {} error kinds, {} timestamp formats",
            set.services.len(),
            set.errors.len(),
            set.timestamps.len()
        );
        set
    }
}
