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

//! benchdoc CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **report**: Write `report.md` for the newest (or selected) benchmark run
//! - **charts**: List the chart files a report would reference
//! - **summary**: Print `totalTime` statistics per scenario and strategy
//! - **modules**: Print average module times per strategy of one scenario
//! - **analyze**: Export the summary and module breakdown as JSON
//!
//! # Input selection
//!
//! Every command reads the newest run under `analysis/results` unless told
//! otherwise:
//!
//! - `--results-dir DIR` (or `BENCHDOC_RESULTS_DIR`): another results root
//! - `--run PREFIX`: newest run whose directory name starts with `PREFIX`
//! - `--input FILE`: a results file outside the run layout
//!
//! Inputs larger than 1 GB are rejected before reading (configurable via
//! `--max-file-size` or `BENCHDOC_MAX_FILE_SIZE`).
//!
//! # Example
//!
//! ```no_run
//! use benchdoc_cli::cli::InputArgs;
//! use benchdoc_cli::commands;
//!
//! # fn main() -> Result<(), benchdoc_cli::error::CliError> {
//! let args = InputArgs {
//!     run: Some("2025-06-01".to_string()),
//!     ..Default::default()
//! };
//! commands::report(&args, None)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
