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

//! Chart file naming and existence probes.
//!
//! Charts are rendered by the plotting step of the analysis pipeline, not
//! here. The report only needs to know the file names that step uses and
//! whether each file was actually produced.

use std::path::{Path, PathBuf};

/// Bar chart comparing `totalTime` across scenarios and strategies.
pub const TOTAL_TIME_CHART: &str = "total_time_comparison.png";

/// Per-strategy chart produced by the plotting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Stacked bar of the three phases per scenario.
    ThreeStepBar,
    /// Pie of the three phases for the target scenario.
    ThreeStepPie,
    /// Pie of the routing sub-modules for the target scenario.
    RoutingPie,
}

impl ChartKind {
    fn stem(self) -> &'static str {
        match self {
            ChartKind::ThreeStepBar => "three_step_breakdown",
            ChartKind::ThreeStepPie => "three_step_breakdown_pie",
            ChartKind::RoutingPie => "routing_breakdown_pie",
        }
    }

    /// File name for `strategy`, e.g. `routing_breakdown_pie_A-Star.png`.
    pub fn file_name(self, strategy: &str) -> String {
        format!("{}_{}.png", self.stem(), safe_strategy_name(strategy))
    }
}

/// Makes a strategy name safe for file names: spaces become `-`, `*`
/// becomes `Star`.
pub fn safe_strategy_name(strategy: &str) -> String {
    strategy.replace(' ', "-").replace('*', "Star")
}

/// Read-only check for whether a chart file exists.
pub trait ChartProbe {
    fn exists(&self, file_name: &str) -> bool;
}

impl<F> ChartProbe for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, file_name: &str) -> bool {
        self(file_name)
    }
}

/// Probes a chart directory on disk.
#[derive(Debug, Clone)]
pub struct ChartDir {
    dir: PathBuf,
}

impl ChartDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl ChartProbe for ChartDir {
    fn exists(&self, file_name: &str) -> bool {
        self.dir.join(file_name).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_safe_strategy_name() {
        assert_eq!(safe_strategy_name("A*"), "AStar");
        assert_eq!(safe_strategy_name("Bus Channel *v2"), "Bus-Channel-Starv2");
        assert_eq!(safe_strategy_name("Vertices-Network"), "Vertices-Network");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            ChartKind::ThreeStepPie.file_name("Legacy A*"),
            "three_step_breakdown_pie_Legacy-AStar.png"
        );
        assert_eq!(
            ChartKind::RoutingPie.file_name("A-Star"),
            "routing_breakdown_pie_A-Star.png"
        );
        assert_eq!(
            ChartKind::ThreeStepBar.file_name("Bus Channel"),
            "three_step_breakdown_Bus-Channel.png"
        );
    }

    #[test]
    fn test_chart_dir_probe() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(TOTAL_TIME_CHART), b"png").unwrap();
        fs::create_dir(temp.path().join("not_a_file.png")).unwrap();

        let probe = ChartDir::new(temp.path());
        assert!(probe.exists(TOTAL_TIME_CHART));
        assert!(!probe.exists("routing_breakdown_pie_A-Star.png"));
        assert!(!probe.exists("not_a_file.png"));
    }

    #[test]
    fn test_closure_probes() {
        let available = ["a.png"];
        let probe = |name: &str| available.contains(&name);
        assert!(probe.exists("a.png"));
        assert!(!probe.exists("b.png"));

        let never = |_: &str| false;
        assert!(!never.exists("a.png"));
    }
}
