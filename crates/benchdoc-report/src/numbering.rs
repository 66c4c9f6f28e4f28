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

//! Hierarchical section numbering.
//!
//! The report has three numbered levels below the document title:
//! scenario (`##`), strategy (`###`) and subsection (`####`). Advancing a
//! level restarts every deeper level, so a new scenario restarts its
//! strategies at 1 and a new strategy restarts its subsections at 1.
//!
//! ```
//! use benchdoc_report::numbering::{Level, Numbering};
//!
//! let mut numbering = Numbering::new();
//! assert_eq!(numbering.advance(Level::Scenario), "1.");
//! assert_eq!(numbering.advance(Level::Strategy), "1.1.");
//! assert_eq!(numbering.advance(Level::Subsection), "1.1.1.");
//! assert_eq!(numbering.advance(Level::Scenario), "2.");
//! assert_eq!(numbering.advance(Level::Strategy), "2.1.");
//! ```

use crate::error::ReportError;

/// Numbered heading level, matching the Markdown heading depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// `##` per-scenario section.
    Scenario = 2,
    /// `###` per-strategy section.
    Strategy = 3,
    /// `####` subsection inside a strategy.
    Subsection = 4,
}

impl Level {
    /// Heading depth (2, 3 or 4).
    pub fn depth(self) -> u8 {
        self as u8
    }

    fn slot(self) -> usize {
        (self.depth() - Level::Scenario.depth()) as usize
    }
}

impl TryFrom<u8> for Level {
    type Error = ReportError;

    fn try_from(depth: u8) -> Result<Self, Self::Error> {
        match depth {
            2 => Ok(Level::Scenario),
            3 => Ok(Level::Strategy),
            4 => Ok(Level::Subsection),
            other => Err(ReportError::InvalidLevel(other)),
        }
    }
}

/// Counters for one report generation.
///
/// Create one per report; the counters start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numbering {
    counters: [u32; 3],
}

impl Numbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `level`, zeroes every deeper level and returns the label
    /// for `level` (e.g. `"1.2."`).
    pub fn advance(&mut self, level: Level) -> String {
        let slot = level.slot();
        self.counters[slot] += 1;
        for deeper in &mut self.counters[slot + 1..] {
            *deeper = 0;
        }
        self.label(level)
    }

    /// Current counter value at `level`.
    pub fn counter(&self, level: Level) -> u32 {
        self.counters[level.slot()]
    }

    /// Counters from the scenario level through `level`, joined by `.`
    /// without a trailing dot (`"1.2"`). Used as caption prefix.
    pub fn prefix(&self, level: Level) -> String {
        self.counters[..=level.slot()]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Section label for `level`, with a trailing dot (`"1.2."`).
    pub fn label(&self, level: Level) -> String {
        format!("{}.", self.prefix(level))
    }
}

/// Figure caption, e.g. `그림 1.2.1. Routing breakdown`.
pub fn figure_caption(prefix: &str, index: u32, title: &str) -> String {
    format!("그림 {}.{}. {}", prefix, index, title)
}

/// Table caption, e.g. `표 1.2.1. Routing breakdown `.
///
/// The trailing space is part of the established caption format.
pub fn table_caption(prefix: &str, index: u32, title: &str) -> String {
    format!("표 {}.{}. {} ", prefix, index, title)
}
