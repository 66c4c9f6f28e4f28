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

//! Report assembly.
//!
//! Walks the target scenario strategy by strategy, deciding which module
//! subsections exist, numbering them and formatting their tables. The
//! result is a [`ReportContext`] ready for the template.
//!
//! Every strategy gets at least one numbered subsection: the analysis
//! placeholder is numbered even when neither module table is present.

use crate::charts::{ChartKind, ChartProbe, TOTAL_TIME_CHART};
use crate::columns::{resolve_phase_columns, PhaseColumns};
use crate::context::{ModuleSubsection, ReportContext, ScenarioSection, StrategySection, REPORT_TITLE};
use crate::markdown::format_as_markdown_table;
use crate::numbering::{figure_caption, table_caption, Level, Numbering};
use benchdoc_core::config::{ReportConfig, DEFAULT_CHARTS_DIR, DEFAULT_TARGET_SCENARIO};
use benchdoc_core::{aggregate, DataTable, FlatTable, SummaryRow};
use tracing::{debug, info, warn};

/// Row label header of module tables.
pub const MODULE_INDEX_NAME: &str = "Module";

/// Value column header of module tables.
pub const AVERAGE_COLUMN: &str = "Average Time (ms)";

/// Options that are not derived from the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Shown under the report title.
    pub date: String,
    /// Scenario to break down per strategy.
    pub target_scenario: String,
    /// Directory chart references are relative to.
    pub charts_dir: String,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            date: String::new(),
            target_scenario: DEFAULT_TARGET_SCENARIO.to_string(),
            charts_dir: DEFAULT_CHARTS_DIR.to_string(),
        }
    }
}

impl AssembleOptions {
    pub fn from_config(config: &ReportConfig, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            target_scenario: config.target_scenario.clone(),
            charts_dir: config.charts_dir.clone(),
        }
    }
}

struct SubsectionKind {
    heading: &'static str,
    figure_title: &'static str,
    table_title: &'static str,
    chart_alt: &'static str,
    chart: ChartKind,
}

const THREE_STEP: SubsectionKind = SubsectionKind {
    heading: "three step result",
    figure_title: "3-Step Phase Breakdown",
    table_title: "3-Step Average Time (ms)",
    chart_alt: "3-Step Performance Chart",
    chart: ChartKind::ThreeStepPie,
};

const ROUTING: SubsectionKind = SubsectionKind {
    heading: "routing breakdown result",
    figure_title: "Routing Phase Breakdown",
    table_title: "Routing Breakdown Average Time (ms)",
    chart_alt: "Routing Detail Chart",
    chart: ChartKind::RoutingPie,
};

/// Builds the report context.
///
/// `summary` is the `totalTime` summary of the whole table; it is rendered
/// as the overall table. The per-strategy breakdown covers
/// `options.target_scenario` only; if it has no records the scenario list
/// is empty. `probe` is consulted read-only for every chart reference.
pub fn assemble(
    table: &FlatTable,
    summary: &[SummaryRow],
    probe: &dyn ChartProbe,
    options: &AssembleOptions,
) -> ReportContext {
    let mut numbering = Numbering::new();

    let summary_table = aggregate::summary_table(summary);
    let overall_chart = probe_chart(probe, TOTAL_TIME_CHART.to_string());

    let scenario_table = table.filter_scenario(&options.target_scenario);
    let scenarios = if scenario_table.is_empty() {
        warn!(scenario = %options.target_scenario, "no records for target scenario");
        Vec::new()
    } else {
        vec![assemble_scenario(
            &mut numbering,
            &options.target_scenario,
            &scenario_table,
            probe,
        )]
    };

    info!(
        scenarios = scenarios.len(),
        summary_rows = summary.len(),
        "report context assembled"
    );

    ReportContext {
        title: REPORT_TITLE.to_string(),
        date: options.date.clone(),
        charts_dir: options.charts_dir.clone(),
        overall_chart,
        summary_table: format_as_markdown_table(Some(&summary_table)),
        target_scenario: options.target_scenario.clone(),
        scenarios,
    }
}

fn assemble_scenario(
    numbering: &mut Numbering,
    scenario: &str,
    table: &FlatTable,
    probe: &dyn ChartProbe,
) -> ScenarioSection {
    let number = numbering.advance(Level::Scenario);

    // Explicit sort: strategy order must not depend on record order.
    let strategies = table
        .strategies()
        .into_iter()
        .map(|strategy| {
            let strategy_table = table.filter_strategy(&strategy);
            assemble_strategy(numbering, &strategy, &strategy_table, probe)
        })
        .collect();

    ScenarioSection {
        number,
        name: scenario.to_string(),
        strategies,
    }
}

fn assemble_strategy(
    numbering: &mut Numbering,
    strategy: &str,
    table: &FlatTable,
    probe: &dyn ChartProbe,
) -> StrategySection {
    let number = numbering.advance(Level::Strategy);

    // Resolve against this strategy's own measured columns so strategies
    // using different naming schemes each get their own phase set.
    let measured = table.measured_columns();
    let phases = resolve_phase_columns(&measured);
    debug!(strategy, phases = ?phases.selected, "resolved phase columns");

    let three_step = if phases.selected.iter().any(|c| table.is_measured(c)) {
        Some(module_subsection(
            numbering,
            &THREE_STEP,
            strategy,
            table,
            &phases.selected,
            &phases,
            probe,
        ))
    } else {
        debug!(strategy, "no phase timings, skipping three step table");
        None
    };

    let routing_columns: Vec<String> = measured
        .iter()
        .filter(|c| !phases.contains(c))
        .cloned()
        .collect();
    let routing = if routing_columns.iter().any(|c| table.is_measured(c)) {
        Some(module_subsection(
            numbering,
            &ROUTING,
            strategy,
            table,
            &routing_columns,
            &phases,
            probe,
        ))
    } else {
        debug!(strategy, "no routing sub-module timings, skipping breakdown table");
        None
    };

    let analysis_number = numbering.advance(Level::Subsection);

    StrategySection {
        number,
        name: strategy.to_string(),
        three_step,
        routing,
        analysis_number,
    }
}

fn module_subsection(
    numbering: &mut Numbering,
    kind: &SubsectionKind,
    strategy: &str,
    table: &FlatTable,
    columns: &[String],
    phases: &PhaseColumns,
    probe: &dyn ChartProbe,
) -> ModuleSubsection {
    let number = numbering.advance(Level::Subsection);

    let series = aggregate::module_means(table, columns)
        .into_iter()
        .map(|(column, mean)| (phases.display_name(&column).to_string(), Some(mean)))
        .collect();
    let averages = DataTable::from_series(
        Some(MODULE_INDEX_NAME.to_string()),
        AVERAGE_COLUMN,
        series,
    );

    let prefix = numbering.prefix(Level::Strategy);
    let index = numbering.counter(Level::Subsection);

    ModuleSubsection {
        number,
        heading: kind.heading.to_string(),
        table: format_as_markdown_table(Some(&averages)),
        table_caption: table_caption(
            &prefix,
            index,
            &format!("{} for \"{}\"", kind.table_title, strategy),
        ),
        figure_caption: figure_caption(
            &prefix,
            index,
            &format!("{} for \"{}\"", kind.figure_title, strategy),
        ),
        chart: probe_chart(probe, kind.chart.file_name(strategy)),
        chart_alt: kind.chart_alt.to_string(),
    }
}

fn probe_chart(probe: &dyn ChartProbe, file_name: String) -> Option<String> {
    if probe.exists(&file_name) {
        Some(file_name)
    } else {
        warn!(chart = %file_name, "chart not found, omitting reference");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchdoc_core::BenchmarkRecord;

    fn record(scenario: &str, strategy: &str, details: &[(&str, f64)]) -> BenchmarkRecord {
        BenchmarkRecord {
            scenario: Some(scenario.to_string()),
            seed: Some(42),
            strategy: Some(strategy.to_string()),
            total_time: Some(details.iter().map(|(_, v)| v).sum()),
            details: details
                .iter()
                .map(|(k, v)| (k.to_string(), Some(*v)))
                .collect(),
        }
    }

    fn build(records: Vec<BenchmarkRecord>, probe: &dyn ChartProbe) -> ReportContext {
        let table = FlatTable::from_records(records);
        let summary = aggregate::summarize_total_time(&table);
        assemble(&table, &summary, probe, &AssembleOptions::default())
    }

    fn no_charts(_: &str) -> bool {
        false
    }

    #[test]
    fn test_three_step_averages() {
        let context = build(
            vec![
                record("Large (Standard)", "Greedy", &[("Placement", 10.0), ("Routing", 20.0)]),
                record("Large (Standard)", "Greedy", &[("Placement", 30.0), ("Routing", 40.0)]),
            ],
            &no_charts,
        );

        let strategy = &context.scenarios[0].strategies[0];
        let three_step = strategy.three_step.as_ref().unwrap();
        assert!(three_step.table.contains("| Placement | 20.00 |"));
        assert!(three_step.table.contains("| Routing | 30.00 |"));
        assert!(!three_step.table.contains("Post-Process"));
        assert!(strategy.routing.is_none());
    }

    #[test]
    fn test_numbering_and_captions() {
        let context = build(
            vec![
                record("Large (Standard)", "B", &[("Placement", 1.0), ("A* Search", 2.0)]),
                record("Large (Standard)", "A", &[("Channel Build", 3.0)]),
            ],
            &no_charts,
        );

        let section = &context.scenarios[0];
        assert_eq!(section.number, "1.");

        let a = &section.strategies[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.number, "1.1.");
        assert!(a.three_step.is_none());
        let routing = a.routing.as_ref().unwrap();
        assert_eq!(routing.number, "1.1.1.");
        assert_eq!(a.analysis_number, "1.1.2.");

        let b = &section.strategies[1];
        assert_eq!(b.number, "1.2.");
        let three_step = b.three_step.as_ref().unwrap();
        assert_eq!(three_step.number, "1.2.1.");
        assert_eq!(
            three_step.figure_caption,
            "그림 1.2.1. 3-Step Phase Breakdown for \"B\""
        );
        assert_eq!(
            three_step.table_caption,
            "표 1.2.1. 3-Step Average Time (ms) for \"B\" "
        );
        assert_eq!(b.routing.as_ref().unwrap().number, "1.2.2.");
        assert_eq!(b.analysis_number, "1.2.3.");
    }

    #[test]
    fn test_strategy_without_module_data_still_gets_analysis_slot() {
        let context = build(vec![record("Large (Standard)", "Idle", &[])], &no_charts);
        let strategy = &context.scenarios[0].strategies[0];
        assert!(strategy.three_step.is_none());
        assert!(strategy.routing.is_none());
        assert_eq!(strategy.analysis_number, "1.1.1.");
    }

    #[test]
    fn test_missing_scenario_gives_empty_sections() {
        let context = build(vec![record("Small", "A", &[("Placement", 1.0)])], &no_charts);
        assert!(context.scenarios.is_empty());
        assert!(context.summary_table.contains("Small / A"));
    }

    #[test]
    fn test_prefixed_phase_exclusion_is_per_strategy() {
        let context = build(
            vec![
                record(
                    "Large (Standard)",
                    "New",
                    &[("L1-Placement", 1.0), ("L1-Routing", 2.0), ("Lane Build", 0.5)],
                ),
                record(
                    "Large (Standard)",
                    "Old",
                    &[("Placement", 3.0), ("Routing", 4.0), ("A* Search", 3.5)],
                ),
            ],
            &no_charts,
        );

        let new = &context.scenarios[0].strategies[0];
        let new_three = new.three_step.as_ref().unwrap();
        assert!(new_three.table.contains("| Placement | 1.00 |"));
        assert!(!new_three.table.contains("L1-"));
        let new_routing = new.routing.as_ref().unwrap();
        assert!(new_routing.table.contains("Lane Build"));
        assert!(!new_routing.table.contains("Placement"));

        let old = &context.scenarios[0].strategies[1];
        assert!(old.three_step.as_ref().unwrap().table.contains("| Routing | 4.00 |"));
        let old_routing = old.routing.as_ref().unwrap();
        assert!(old_routing.table.contains("A* Search"));
        assert!(!old_routing.table.contains("| Routing |"));
    }

    #[test]
    fn test_chart_references_follow_probe() {
        let probe = |name: &str| name == "three_step_breakdown_pie_Legacy-AStar.png";
        let context = build(
            vec![record(
                "Large (Standard)",
                "Legacy A*",
                &[("Placement", 1.0), ("A* Search", 2.0)],
            )],
            &probe,
        );

        assert_eq!(context.overall_chart, None);
        let strategy = &context.scenarios[0].strategies[0];
        assert_eq!(
            strategy.three_step.as_ref().unwrap().chart.as_deref(),
            Some("three_step_breakdown_pie_Legacy-AStar.png")
        );
        assert_eq!(strategy.routing.as_ref().unwrap().chart, None);
    }

    #[test]
    fn test_options_from_config() {
        let config = ReportConfig::default().with_target_scenario("Medium");
        let options = AssembleOptions::from_config(&config, "2025-01-01_10-00-00");
        assert_eq!(options.target_scenario, "Medium");
        assert_eq!(options.charts_dir, "charts");
        assert_eq!(options.date, "2025-01-01_10-00-00");
    }
}
