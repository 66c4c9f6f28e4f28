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

//! Charts command - lists chart references and whether the files exist

use super::load_run;
use crate::cli::InputArgs;
use crate::error::Result;
use benchdoc_core::FlatTable;
use benchdoc_report::charts::TOTAL_TIME_CHART;
use benchdoc_report::{ChartKind, ChartProbe};
use colored::Colorize;

/// One chart file the report may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    /// Strategy the chart belongs to; `None` for the overall chart.
    pub strategy: Option<String>,
    pub file_name: String,
    pub exists: bool,
}

/// Chart files for the overall comparison and each strategy of `scenario`.
pub fn chart_listing(table: &FlatTable, scenario: &str, probe: &dyn ChartProbe) -> Vec<ChartEntry> {
    let entry = |strategy: Option<&str>, file_name: String| ChartEntry {
        strategy: strategy.map(str::to_string),
        exists: probe.exists(&file_name),
        file_name,
    };

    let mut entries = vec![entry(None, TOTAL_TIME_CHART.to_string())];
    for strategy in table.filter_scenario(scenario).strategies() {
        for kind in [ChartKind::ThreeStepBar, ChartKind::ThreeStepPie, ChartKind::RoutingPie] {
            entries.push(entry(Some(strategy.as_str()), kind.file_name(&strategy)));
        }
    }
    entries
}

/// Prints the chart listing for the selected run.
pub fn charts(args: &InputArgs) -> Result<()> {
    let run = load_run(args)?;
    let chart_dir = benchdoc_report::ChartDir::new(run.run_dir.join(&run.config.charts_dir));
    let entries = chart_listing(&run.table, &run.config.target_scenario, &chart_dir);

    println!("{}", "Chart files".bold().underline());
    println!("{}  {}", "Directory:".cyan(), chart_dir.path().display());

    let mut current: Option<&str> = None;
    for entry in &entries {
        if entry.strategy.as_deref() != current {
            current = entry.strategy.as_deref();
            if let Some(strategy) = current {
                println!();
                println!("{} {}", "Strategy:".cyan(), strategy.green());
            }
        }
        let mark = if entry.exists { "✓".green() } else { "✗".red() };
        println!("  {} {}/{}", mark, run.config.charts_dir, entry.file_name);
    }

    let present = entries.iter().filter(|e| e.exists).count();
    println!();
    println!(
        "{} {} of {} chart files present",
        "Summary:".bright_blue().bold(),
        present,
        entries.len()
    );
    Ok(())
}
