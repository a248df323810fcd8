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

//! Structured error extraction for data-pipeline failure logs.
//!
//! [`parser::LogProcessor`] turns the raw output of a workflow orchestrator,
//! a managed Spark cluster, a serverless function runtime or a notebook
//! service into an [`core::ErrorRecord`] that downstream analysis can consume.

pub mod config;
pub mod core;
pub mod parser;

pub use crate::core::{ErrorRecord, RawLog};
pub use crate::parser::LogProcessor;
