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

//! Commands that work on a run directory.

use super::InputArgs;
use crate::commands;
use crate::error::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Generate report.md for a benchmark run
    ///
    /// Loads the newest run (or the one selected with --run / --input),
    /// aggregates it and writes report.md into the run directory. Charts
    /// already present under charts/ are referenced; missing ones are left out.
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Report date (defaults to the run directory name)
        #[arg(long, value_name = "TEXT")]
        date: Option<String>,
    },

    /// List the chart files a report would reference
    ///
    /// Prints every chart name for the overall comparison and for each
    /// strategy of the target scenario, marking which files exist.
    Charts {
        #[command(flatten)]
        input: InputArgs,
    },
}

impl ReportCommands {
    pub fn execute(self) -> Result<()> {
        match self {
            ReportCommands::Report { input, date } => commands::report(&input, date),
            ReportCommands::Charts { input } => commands::charts(&input),
        }
    }
}
