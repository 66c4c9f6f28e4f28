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

//! benchdoc command line interface

use benchdoc_cli::cli::Commands;
use benchdoc_cli::logging;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

/// benchdoc - benchmark results analysis and Markdown reports
///
/// # Examples
///
/// ```bash
/// # Report for the newest run under analysis/results
/// benchdoc report
///
/// # Report for a specific day, breaking down another scenario
/// benchdoc report --run 2025-06-01 --scenario "Medium"
///
/// # Pretty JSON of the aggregates
/// benchdoc analyze --pretty --output analysis.json
///
/// # Debug logging
/// RUST_LOG=benchdoc=debug benchdoc summary
/// ```
#[derive(Parser)]
#[command(name = "benchdoc")]
#[command(author, version, about = "benchdoc - benchmark results analysis and Markdown reports", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint.yellow());
            }
            ExitCode::FAILURE
        }
    }
}
