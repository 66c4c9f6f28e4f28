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

//! Report context handed to the template.
//!
//! Built once by the assembler and never mutated afterwards. All numbering
//! and caption strings are final; the template prints them verbatim.

use serde::Serialize;

/// Title of the generated document.
pub const REPORT_TITLE: &str = "Performance Benchmark Report";

/// Complete input of the report template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportContext {
    pub title: String,
    /// Run identifier shown under the title (the run directory name).
    pub date: String,
    /// Relative directory chart references are resolved against.
    pub charts_dir: String,
    /// Overall comparison chart, present only if the file exists.
    pub overall_chart: Option<String>,
    /// Markdown table of `totalTime` statistics per scenario and strategy.
    pub summary_table: String,
    /// Scenario the per-strategy breakdown was requested for.
    pub target_scenario: String,
    /// Empty when the target scenario has no records.
    pub scenarios: Vec<ScenarioSection>,
}

/// One numbered scenario section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSection {
    /// Section label, e.g. `1.`
    pub number: String,
    pub name: String,
    /// Strategies in lexicographic order.
    pub strategies: Vec<StrategySection>,
}

/// One numbered strategy section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySection {
    /// Section label, e.g. `1.2.`
    pub number: String,
    pub name: String,
    /// Average time of the three top-level phases.
    pub three_step: Option<ModuleSubsection>,
    /// Average time of the routing sub-modules.
    pub routing: Option<ModuleSubsection>,
    /// Label of the free-text analysis subsection. Always present.
    pub analysis_number: String,
}

/// A numbered table of per-module averages, with an optional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSubsection {
    /// Section label, e.g. `1.2.1.`
    pub number: String,
    pub heading: String,
    /// Markdown table text.
    pub table: String,
    pub table_caption: String,
    pub figure_caption: String,
    /// Chart file name, present only if the file exists.
    pub chart: Option<String>,
    /// Alt text for the chart image.
    pub chart_alt: String,
}
