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

//! Summary and modules commands - console views of the aggregates

use super::{load_run, scenario_breakdown};
use crate::cli::InputArgs;
use crate::error::Result;
use benchdoc_core::aggregate::{summarize_total_time, SummaryRow};
use colored::Colorize;

const RULE_WIDTH: usize = 80;

fn cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

/// Renders summary rows as an aligned plain-text table.
pub fn summary_lines(rows: &[SummaryRow]) -> Vec<String> {
    let labels: Vec<String> = rows
        .iter()
        .map(|r| format!("{} / {}", r.scenario, r.strategy))
        .collect();
    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once("scenario / strategy".len()))
        .max()
        .unwrap_or_default();

    let mut lines = vec![format!(
        "{:<width$} {:>10} {:>10} {:>10} {:>10}",
        "scenario / strategy", "mean", "std", "min", "max"
    )];
    for (label, row) in labels.iter().zip(rows) {
        lines.push(format!(
            "{:<width$} {:>10} {:>10} {:>10} {:>10}",
            label,
            cell(row.stats.mean),
            cell(row.stats.std),
            cell(row.stats.min),
            cell(row.stats.max),
        ));
    }
    lines
}

/// Prints `totalTime` statistics for every scenario and strategy.
pub fn summary(args: &InputArgs) -> Result<()> {
    let run = load_run(args)?;
    let rows = summarize_total_time(&run.table);

    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", "PERFORMANCE SUMMARY (totalTime in ms)".bold());
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Run: {}", run.date);
    println!("Records: {}", run.table.len());
    println!();
    for line in summary_lines(&rows) {
        println!("{}", line);
    }
    Ok(())
}

/// Prints average module times per strategy of the target scenario.
pub fn modules(args: &InputArgs) -> Result<()> {
    let run = load_run(args)?;
    let scenario = &run.config.target_scenario;

    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "{}",
        format!("MODULE PERFORMANCE FOR '{}' (average time in ms)", scenario).bold()
    );
    println!("{}", "=".repeat(RULE_WIDTH));

    let breakdown = scenario_breakdown(&run.table, scenario);
    if breakdown.is_empty() {
        println!("No data found for scenario: '{}'", scenario);
        return Ok(());
    }

    for (strategy, means) in breakdown {
        println!();
        println!("--- {} {} ---", "Strategy:".cyan(), strategy.green());
        let width = means
            .iter()
            .map(|(m, _)| m.chars().count())
            .max()
            .unwrap_or_default();
        for (module, mean) in means {
            println!("  {:<width$} {:>10.2}", module, mean);
        }
    }
    Ok(())
}
