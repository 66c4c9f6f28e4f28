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

//! CLI command implementations

mod analyze;
mod charts;
mod report;
mod summary;

pub use analyze::{analysis_json, analyze};
pub use charts::{chart_listing, charts, ChartEntry};
pub use report::report;
pub use summary::{modules, summary};

use crate::cli::InputArgs;
use crate::error::Result;
use benchdoc_core::{aggregate, discovery, loader, FlatTable, ReportConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded results file and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedRun {
    pub config: ReportConfig,
    pub table: FlatTable,
    /// Directory the report and charts belong to.
    pub run_dir: PathBuf,
    /// Report date: the run directory name, or today for `--input` files.
    pub date: String,
}

/// Resolves and loads the results selected by `args`.
pub fn load_run(args: &InputArgs) -> Result<LoadedRun> {
    let config = args.config()?;

    let (path, date) = match &args.input {
        Some(file) => (
            file.clone(),
            chrono::Local::now().format("%Y-%m-%d").to_string(),
        ),
        None => {
            let path = discovery::find_results_file(&config)?;
            let date = path
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            (path, date)
        }
    };

    let table = loader::load_results(&path, config.max_file_size)?;
    let run_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    debug!(run_dir = %run_dir.display(), date = %date, "run loaded");

    Ok(LoadedRun {
        config,
        table,
        run_dir,
        date,
    })
}

/// Average time of every measured module, per strategy of `scenario`.
///
/// Strategies are sorted; modules keep their column order. Strategies with
/// no measured module are left out.
pub fn scenario_breakdown(table: &FlatTable, scenario: &str) -> Vec<(String, Vec<(String, f64)>)> {
    let scenario_table = table.filter_scenario(scenario);
    scenario_table
        .strategies()
        .into_iter()
        .filter_map(|strategy| {
            let strategy_table = scenario_table.filter_strategy(&strategy);
            let means = aggregate::module_means(&strategy_table, &strategy_table.measured_columns());
            (!means.is_empty()).then_some((strategy, means))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchdoc_core::BenchmarkRecord;

    fn record(scenario: &str, strategy: &str, details: &[(&str, Option<f64>)]) -> BenchmarkRecord {
        BenchmarkRecord {
            scenario: Some(scenario.to_string()),
            seed: None,
            strategy: Some(strategy.to_string()),
            total_time: Some(1.0),
            details: details.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn test_scenario_breakdown() {
        let table = FlatTable::from_records(vec![
            record("Large (Standard)", "Zeta", &[("Placement", Some(2.0)), ("Routing", None)]),
            record("Large (Standard)", "Alpha", &[("Routing", Some(4.0))]),
            record("Large (Standard)", "Alpha", &[("Routing", Some(5.0))]),
            record("Large (Standard)", "Empty", &[("Routing", None)]),
            record("Small", "Alpha", &[("Placement", Some(9.0))]),
        ]);

        let breakdown = scenario_breakdown(&table, "Large (Standard)");
        assert_eq!(
            breakdown,
            vec![
                ("Alpha".to_string(), vec![("Routing".to_string(), 4.5)]),
                ("Zeta".to_string(), vec![("Placement".to_string(), 2.0)]),
            ]
        );
        assert!(scenario_breakdown(&table, "Huge").is_empty());
    }
}
