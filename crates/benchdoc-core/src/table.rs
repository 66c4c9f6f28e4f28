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

//! Labelled tables handed to the report formatters.
//!
//! A [`DataTable`] is a small row-indexed table: one label per row (the
//! row index, optionally named) plus typed columns. Numeric cells are
//! `Option<f64>` so a missing value never turns into `0.00`.

use serde::Serialize;

/// Values of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    /// Numeric column, rendered with fixed precision and right-aligned.
    Numeric(Vec<Option<f64>>),
    /// Free-text column, rendered as-is and left-aligned.
    Text(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    /// Returns `true` when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for numeric columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }
}

/// Row-indexed table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    /// Name of the row index; `None` renders an empty header cell.
    pub index_name: Option<String>,
    /// One label per row.
    pub index: Vec<String>,
    pub columns: Vec<Column>,
}

impl DataTable {
    /// Creates an empty table with the given index name.
    pub fn new(index_name: Option<String>) -> Self {
        Self {
            index_name,
            index: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Builds a single-column numeric table, as produced when a series of
    /// per-module means is turned into a frame.
    pub fn from_series(
        index_name: Option<String>,
        column_name: impl Into<String>,
        series: Vec<(String, Option<f64>)>,
    ) -> Self {
        let (index, values): (Vec<String>, Vec<Option<f64>>) = series.into_iter().unzip();
        Self {
            index_name,
            index,
            columns: vec![Column::numeric(column_name, values)],
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() || self.columns.is_empty()
    }

    /// Looks up a numeric cell by row label and column name.
    pub fn value(&self, row: &str, column: &str) -> Option<f64> {
        let row_idx = self.index.iter().position(|r| r == row)?;
        let column = self.columns.iter().find(|c| c.name == column)?;
        match &column.data {
            ColumnData::Numeric(values) => values.get(row_idx).copied().flatten(),
            ColumnData::Text(_) => None,
        }
    }
}
