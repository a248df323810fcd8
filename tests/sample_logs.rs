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

use chrono::NaiveDate;
use pipetriage::parser::error_kind::ErrorKind;
use pipetriage::parser::service::Service;
use pipetriage::parser::timestamp::{FixedClock, TimestampFormat};
use pipetriage::{ErrorRecord, LogProcessor};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn process(name: &str) -> ErrorRecord {
    let now = NaiveDate::from_ymd_opt(2026, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");
    LogProcessor::with_clock(FixedClock(now))
        .process_log_file(&fixture(name))
        .expect("fixture is readable")
}

#[test]
fn airflow_connection_timeout() {
    let record = process("airflow_failure.log");
    assert_eq!(record.service, Service::Orchestrator);
    assert_eq!(record.error_type, ErrorKind::ConnectionTimeout);
    assert_eq!(record.pipeline_name, "data_ingestion_dag");
    assert_eq!(record.step_name, "extract_user_data");
    assert_eq!(record.timestamp, "2025-01-15 14:23:41");
    assert_eq!(record.timestamp_format, Some(TimestampFormat::Bracketed));
    assert_eq!(
        record.error_message,
        "[2025-01-15 14:23:45,123] {taskinstance.py:1482} ERROR - Task failed with exception\n\
         psycopg2.OperationalError: connection to server at \"prod-db.company.com\" (10.0.1.45), port 5432 failed: Connection timed out"
    );
    assert_eq!(
        record.stack_trace,
        "File \"/opt/airflow/dags/extract_user_data.py\", line 45, in execute\n\
         File \"/usr/local/lib/python3.9/site-packages/psycopg2/__init__.py\", line 122, in connect"
    );
}

#[test]
fn emr_memory_error() {
    let record = process("emr_memory_error.log");
    assert_eq!(record.service, Service::ManagedSpark);
    assert_eq!(record.error_type, ErrorKind::MemoryError);
    assert_eq!(record.timestamp, "2025-01-15 14:23:45");
    assert_eq!(record.timestamp_format, Some(TimestampFormat::Unbracketed));
    assert_eq!(record.pipeline_name, "unknown_pipeline");
    assert_eq!(record.step_name, "7");
    assert_eq!(record.error_message.lines().count(), 3);
    assert_eq!(record.stack_trace.lines().count(), 3);
    assert!(record
        .stack_trace
        .starts_with("at org.apache.spark.scheduler.DAGScheduler.failJobAndIndependentStages"));
}

#[test]
fn lambda_permission_denied() {
    let record = process("lambda_permission_error.log");
    assert_eq!(record.service, Service::ServerlessFunction);
    assert_eq!(record.error_type, ErrorKind::PermissionDenied);
    assert_eq!(record.pipeline_name, "s3-ingest-handler");
    assert_eq!(record.timestamp, "2025-01-15T14:23:45.789Z");
    assert_eq!(
        record.timestamp_format,
        Some(TimestampFormat::IsoAfterErrorTag)
    );
    assert_eq!(record.stack_trace.lines().count(), 2);
}

#[test]
fn databricks_sql_error() {
    let record = process("databricks_sql_error.log");
    assert_eq!(record.service, Service::NotebookAnalytics);
    assert_eq!(record.error_type, ErrorKind::SqlError);
    assert_eq!(record.pipeline_name, "revenue_rollup");
    assert_eq!(record.step_name, "unknown_step");
    assert_eq!(record.timestamp, "01/15/25 14:23:45");
    assert_eq!(record.stack_trace, "");
}

#[test]
fn batch_keeps_input_order() {
    let names = [
        "databricks_sql_error.log",
        "airflow_failure.log",
        "lambda_permission_error.log",
        "emr_memory_error.log",
    ];
    let paths: Vec<_> = names.iter().map(|n| fixture(n)).collect();
    let services: Vec<_> = LogProcessor::new()
        .process_batch(&paths)
        .into_iter()
        .map(|r| r.expect("fixture is readable").service)
        .collect();
    assert_eq!(
        services,
        [
            Service::NotebookAnalytics,
            Service::Orchestrator,
            Service::ServerlessFunction,
            Service::ManagedSpark,
        ]
    );
}
