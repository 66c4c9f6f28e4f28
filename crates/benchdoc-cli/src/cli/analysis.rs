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

//! Commands that print aggregates.

use super::InputArgs;
use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Print totalTime statistics per scenario and strategy
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print average module times per strategy for one scenario
    Modules {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Export the summary and module breakdown as JSON
    ///
    /// Writes {"overall_summary": ..., "scenario_breakdown": ...} to stdout
    /// or to the given file.
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output file path (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

impl AnalysisCommands {
    pub fn execute(self) -> Result<()> {
        match self {
            AnalysisCommands::Summary { input } => commands::summary(&input),
            AnalysisCommands::Modules { input } => commands::modules(&input),
            AnalysisCommands::Analyze {
                input,
                output,
                pretty,
            } => commands::analyze(&input, output.as_deref(), pretty),
        }
    }
}
