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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by what they produce:
//!
//! - [`report`]: Files in the run directory (report, chart listing)
//! - [`analysis`]: Console and JSON views of the aggregates (summary, modules, analyze)

mod analysis;
mod args;
mod report;

use crate::error::Result;
use clap::Subcommand;

pub use analysis::AnalysisCommands;
pub use args::InputArgs;
pub use report::ReportCommands;

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Report (report, charts)
/// └── Analysis (summary, modules, analyze)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Analysis(AnalysisCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Analysis(cmd) => cmd.execute(),
        }
    }
}
