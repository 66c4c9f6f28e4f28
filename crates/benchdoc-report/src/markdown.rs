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

//! GitHub-flavored Markdown tables.
//!
//! Output shape for a table with a named index and one numeric column:
//!
//! ```text
//! | Module | Average Time (ms) |
//! |:---|---:|
//! | Placement | 20.00 |
//! | Routing | 30.00 |
//! ```
//!
//! The row-label column and text columns are left-aligned (`:---`), numeric
//! columns right-aligned (`---:`). Numbers use two fixed decimals; missing
//! values are empty cells.

use benchdoc_core::{ColumnData, DataTable};

const ALIGN_LEFT: &str = ":---";
const ALIGN_RIGHT: &str = "---:";

/// Formats `table` as a pipe table. `None` and empty tables give `""`.
///
/// Lines are separated by `\n`; there is no trailing newline.
pub fn format_as_markdown_table(table: Option<&DataTable>) -> String {
    let table = match table {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    let mut lines = Vec::with_capacity(table.row_count() + 2);

    let mut header = vec![escape_cell(table.index_name.as_deref().unwrap_or(""))];
    header.extend(table.columns.iter().map(|c| escape_cell(&c.name)));
    lines.push(row(&header));

    let mut align = vec![ALIGN_LEFT.to_string()];
    align.extend(table.columns.iter().map(|c| {
        if c.data.is_numeric() {
            ALIGN_RIGHT.to_string()
        } else {
            ALIGN_LEFT.to_string()
        }
    }));
    lines.push(format!("|{}|", align.join("|")));

    for (i, label) in table.index.iter().enumerate() {
        let mut cells = vec![escape_cell(label)];
        cells.extend(table.columns.iter().map(|c| cell(&c.data, i)));
        lines.push(row(&cells));
    }

    lines.join("\n")
}

fn cell(data: &ColumnData, row: usize) -> String {
    match data {
        ColumnData::Numeric(values) => values
            .get(row)
            .copied()
            .flatten()
            .map(|v| format!("{:.2}", v))
            .unwrap_or_default(),
        ColumnData::Text(values) => values
            .get(row)
            .and_then(|v| v.as_deref())
            .map(escape_cell)
            .unwrap_or_default(),
    }
}

fn row(cells: &[String]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}

// A bare pipe would split the cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchdoc_core::Column;

    fn modules() -> DataTable {
        DataTable::from_series(
            Some("Module".to_string()),
            "Average Time (ms)",
            vec![
                ("Placement".to_string(), Some(20.0)),
                ("Routing".to_string(), Some(30.0)),
            ],
        )
    }

    #[test]
    fn test_none_and_empty_give_empty_string() {
        assert_eq!(format_as_markdown_table(None), "");
        assert_eq!(format_as_markdown_table(Some(&DataTable::new(None))), "");
    }

    #[test]
    fn test_module_table() {
        let expected = "| Module | Average Time (ms) |\n\
                        |:---|---:|\n\
                        | Placement | 20.00 |\n\
                        | Routing | 30.00 |";
        assert_eq!(format_as_markdown_table(Some(&modules())), expected);
    }

    #[test]
    fn test_two_decimal_rounding_and_right_alignment() {
        let table = DataTable::from_series(None, "value", vec![("x".to_string(), Some(12.3456))]);
        let text = format_as_markdown_table(Some(&table));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "|  | value |");
        assert_eq!(lines[1], "|:---|---:|");
        assert_eq!(lines[2], "| x | 12.35 |");
    }

    #[test]
    fn test_missing_values_are_empty_cells() {
        let table = DataTable {
            index_name: None,
            index: vec!["a".to_string(), "b".to_string()],
            columns: vec![
                Column::numeric("n", vec![None, Some(1.0)]),
                Column::text("t", vec![Some("fast".to_string()), None]),
            ],
        };
        let text = format_as_markdown_table(Some(&table));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "|:---|---:|:---|");
        assert_eq!(lines[2], "| a |  | fast |");
        assert_eq!(lines[3], "| b | 1.00 |  |");
        assert!(!text.contains("nan"));
        assert!(!text.contains("0.00 |  | fast"));
    }

    #[test]
    fn test_pipes_are_escaped() {
        let table = DataTable::from_series(None, "a|b", vec![("x|y".to_string(), Some(1.0))]);
        let text = format_as_markdown_table(Some(&table));
        assert!(text.starts_with("|  | a\\|b |"));
        assert!(text.contains("| x\\|y | 1.00 |"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let table = modules();
        let first = format_as_markdown_table(Some(&table));
        let second = format_as_markdown_table(Some(&table));
        assert_eq!(first, second);
    }
}
