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

//! Report command - writes report.md into the run directory

use super::load_run;
use crate::cli::InputArgs;
use crate::error::Result;
use benchdoc_report::export::generate_report;
use colored::Colorize;

/// Generates the Markdown report and prints its path.
///
/// `date` overrides the date shown under the title.
pub fn report(args: &InputArgs, date: Option<String>) -> Result<()> {
    let run = load_run(args)?;
    let date = date.unwrap_or(run.date);
    let path = generate_report(&run.table, &run.config, &run.run_dir, Some(date))?;

    println!("{} {}", "Report written:".green().bold(), path.display());
    Ok(())
}
