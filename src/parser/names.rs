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

//! Pipeline and step identifiers.
//!
//! Each service labels its identifiers differently (`Pipeline:` headers,
//! Airflow's `Task <dag>.<task>`, Lambda `Function:` lines, Databricks
//! notebook paths, Spark stages). Rather than modeling four schemas, a single
//! ordered cascade per field picks up the common cases. A `Task foo.bar`
//! phrase in unrelated text can still produce a false positive.

use super::patterns::PatternSet;

pub const UNKNOWN_PIPELINE: &str = "unknown_pipeline";
pub const UNKNOWN_STEP: &str = "unknown_step";

pub(crate) const PIPELINE_NAME_PATTERNS: &[(&str, &str)] = &[
    ("pipeline label", r"Pipeline:\s*([^\s,]+)"),
    ("task dag", r"Task\s+([^.]+\.[^.]+)"),
    ("function label", r"Function:\s*([^\s,]+)"),
    ("notebook path", r"Notebook:\s*/[^/]+/([^/]+)"),
];

pub(crate) const STEP_NAME_PATTERNS: &[(&str, &str)] = &[
    ("step label", r"Step:\s*([^\s,\n]+)"),
    ("task id", r"Task\s+[^.]+\.([^.\s]+)"),
    ("spark stage", r"Stage\s+(\d+)"),
    ("application label", r"Application:\s*([^\s,]+)"),
];

/// Extract the pipeline name, or [`UNKNOWN_PIPELINE`].
pub fn extract_pipeline_name(content: &str, patterns: &PatternSet) -> String {
    patterns.pipeline_names.first_capture(content).map_or_else(
        || UNKNOWN_PIPELINE.to_string(),
        |(source, name)| {
            tracing::debug!("Pipeline name {name:?} from {source}");
            name.to_string()
        },
    )
}

/// Extract the step name, or [`UNKNOWN_STEP`].
pub fn extract_step_name(content: &str, patterns: &PatternSet) -> String {
    patterns.step_names.first_capture(content).map_or_else(
        || UNKNOWN_STEP.to_string(),
        |(source, name)| {
            tracing::debug!("Step name {name:?} from {source}");
            name.to_string()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(content: &str) -> String {
        extract_pipeline_name(content, PatternSet::builtin())
    }

    fn step(content: &str) -> String {
        extract_step_name(content, PatternSet::builtin())
    }

    #[test]
    fn test_labeled_fields() {
        let content = "Pipeline: data_ingestion_dag\nStep: extract_user_data\n";
        assert_eq!(pipeline(content), "data_ingestion_dag");
        assert_eq!(step(content), "extract_user_data");
    }

    #[test]
    fn test_label_value_stops_at_comma() {
        assert_eq!(pipeline("Pipeline: nightly_etl, attempt 2"), "nightly_etl");
        assert_eq!(step("Step:load_orders,retry=1"), "load_orders");
    }

    #[test]
    fn test_airflow_task_identifier() {
        let content = "Task sales_dag.load_orders failed with exit code 1";
        assert_eq!(pipeline(content), "sales_dag.load_orders failed with exit code 1");
        assert_eq!(step(content), "load_orders");
    }

    #[test]
    fn test_function_and_application() {
        assert_eq!(pipeline("Function: s3-ingest-handler"), "s3-ingest-handler");
        assert_eq!(step("Application: application_1705312345_0042"), "application_1705312345_0042");
    }

    #[test]
    fn test_notebook_path_segment() {
        assert_eq!(pipeline("Notebook: /Shared/revenue_rollup/cell_12"), "revenue_rollup");
    }

    #[test]
    fn test_spark_stage() {
        assert_eq!(step("Job aborted due to stage failure: Stage 7 failed 4 times"), "7");
    }

    #[test]
    fn test_cascade_order() {
        // A labeled pipeline wins over a later-declared function label.
        let content = "Function: handler\nPipeline: primary";
        assert_eq!(pipeline(content), "primary");
        // Step label wins over a Spark stage.
        assert_eq!(step("Stage 3 running\nStep: transform"), "transform");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(pipeline(""), UNKNOWN_PIPELINE);
        assert_eq!(step(""), UNKNOWN_STEP);
        assert_eq!(pipeline("nothing useful"), UNKNOWN_PIPELINE);
        assert_eq!(step("nothing useful"), UNKNOWN_STEP);
    }
}
