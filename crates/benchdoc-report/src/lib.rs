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

//! benchdoc report pipeline
//!
//! Turns a [`FlatTable`](benchdoc_core::FlatTable) into the Markdown
//! performance report.
//!
//! # Pipeline
//!
//! ```text
//! FlatTable ──┬─> columns::resolve_phase_columns ─┐
//!             ├─> aggregate::module_means ────────┼─> assembler::assemble ─> ReportContext
//!             └─> aggregate::summarize_total_time ┘          │
//!                                                  template::render ─> report.md
//! ```
//!
//! - [`columns`]: Phase column resolution across legacy and `L1-` naming
//! - [`markdown`]: GitHub-flavored Markdown table formatting
//! - [`numbering`]: Hierarchical section numbers and captions
//! - [`charts`]: Chart file naming and existence probes
//! - [`assembler`]: Builds the [`ReportContext`]
//! - [`template`]: Renders the context into the final document
//! - [`export`]: End-to-end report generation for one run directory
//!
//! # Example
//!
//! ```no_run
//! use benchdoc_core::{config::ReportConfig, discovery, loader};
//! use benchdoc_report::export::generate_report;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig::default();
//! let results = discovery::find_results_file(&config)?;
//! let table = loader::load_results(&results, config.max_file_size)?;
//! let report_path = generate_report(&table, &config, results.parent().unwrap(), None)?;
//! println!("report written to {}", report_path.display());
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod charts;
pub mod columns;
pub mod context;
pub mod error;
pub mod export;
pub mod markdown;
pub mod numbering;
pub mod template;

pub use assembler::{assemble, AssembleOptions};
pub use charts::{safe_strategy_name, ChartDir, ChartKind, ChartProbe};
pub use columns::{resolve_phase_columns, PhaseColumns, PHASE_NAMES, PHASE_PREFIX};
pub use context::{ModuleSubsection, ReportContext, ScenarioSection, StrategySection};
pub use error::{ReportError, Result};
pub use markdown::format_as_markdown_table;
pub use numbering::{figure_caption, table_caption, Level, Numbering};
pub use template::render;
