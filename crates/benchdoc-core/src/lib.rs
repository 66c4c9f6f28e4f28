// Dweve benchdoc - Benchmark Report Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! benchdoc core data model
//!
//! Loads the JSON records written by the layout benchmark harness, flattens
//! their per-module timings into a column-oriented table, and computes the
//! grouped aggregates the report is built from.
//!
//! # Modules
//!
//! - [`config`]: Report configuration with environment overrides
//! - [`discovery`]: Locating the newest benchmark run on disk
//! - [`loader`]: Reading and flattening the raw results file
//! - [`record`]: A single measured benchmark run
//! - [`frame`]: All records with `details` promoted to columns
//! - [`table`]: Generic labelled tables handed to the formatters
//! - [`aggregate`]: `totalTime` summaries and per-module means
//!
//! # Example
//!
//! ```no_run
//! use benchdoc_core::{config::ReportConfig, discovery, loader};
//!
//! # fn main() -> benchdoc_core::Result<()> {
//! let config = ReportConfig::default();
//! let path = discovery::find_results_file(&config)?;
//! let table = loader::load_results(&path, config.max_file_size)?;
//! println!("{} records", table.len());
//! # Ok(())
//! # }
//! ```
//!
//! # "Not measured" values
//!
//! A module that a strategy never exercises has no value at all, which is
//! different from a module that took zero milliseconds. Every timing is an
//! `Option<f64>` and aggregation skips `None` entirely.

pub mod aggregate;
pub mod config;
pub mod discovery;
pub mod error;
pub mod frame;
pub mod loader;
pub mod record;
pub mod table;

pub use aggregate::{module_means, summarize_total_time, summary_table, SummaryRow, TimeStats};
pub use config::ReportConfig;
pub use error::{CoreError, Result};
pub use frame::{FlatTable, BASIC_COLUMNS};
pub use record::BenchmarkRecord;
pub use table::{Column, ColumnData, DataTable};
