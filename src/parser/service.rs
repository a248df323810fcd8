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

//! Service classification: which execution platform produced a log.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::patterns::PatternSet;

/// The pipeline-execution platform that emitted a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    /// Workflow orchestrator (Airflow)
    Orchestrator,
    /// Managed Spark cluster (EMR)
    ManagedSpark,
    /// Serverless function runtime (Lambda)
    ServerlessFunction,
    /// Notebook-based analytics service (Databricks)
    NotebookAnalytics,
    #[default]
    Unknown,
}

impl Service {
    pub const ALL: [Self; 5] = [
        Self::Orchestrator,
        Self::ManagedSpark,
        Self::ServerlessFunction,
        Self::NotebookAnalytics,
        Self::Unknown,
    ];

    /// Label used in serialized records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orchestrator => "orchestrator",
            Self::ManagedSpark => "managed_spark",
            Self::ServerlessFunction => "serverless_function",
            Self::NotebookAnalytics => "notebook_analytics",
            Self::Unknown => "unknown",
        }
    }

    /// Product name of the platform the signatures were written against
    #[must_use]
    pub const fn platform(self) -> &'static str {
        match self {
            Self::Orchestrator => "Airflow",
            Self::ManagedSpark => "EMR",
            Self::ServerlessFunction => "Lambda",
            Self::NotebookAnalytics => "Databricks",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content signatures per service, in evaluation order. Matched case-insensitively.
pub(crate) const SERVICE_SIGNATURES: &[(Service, &str)] = &[
    // Scheduler log markers
    (Service::Orchestrator, r"airflow|taskinstance\.py"),
    // Distributed-compute exception names
    (Service::ManagedSpark, r"org\.apache\.spark|SparkException"),
    // Invocation markers
    (
        Service::ServerlessFunction,
        r"ERROR.*Z.*lambda_handler|botocore\.exceptions",
    ),
    (Service::NotebookAnalytics, r"SparkSQLException|databricks|notebook"),
];

/// Identify the service that generated `content`.
///
/// Returns the first service in declaration order whose signature matches
/// anywhere in the text, or [`Service::Unknown`].
pub fn identify_service(content: &str, patterns: &PatternSet) -> Service {
    let service = patterns.services.first_match(content).unwrap_or_default();
    tracing::debug!("Identified service: {service}");
    service
}
