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

//! Error types for loading and aggregating benchmark results.
//!
//! Discovery failures are split into one variant per missing piece so the
//! CLI can tell the operator exactly what to re-run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while locating, reading or interpreting benchmark results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The results root directory does not exist.
    #[error("results directory not found at '{path}'")]
    ResultsDirNotFound {
        /// The directory that was searched
        path: PathBuf,
    },

    /// No run subdirectory exists, or none matches the requested prefix.
    #[error("no benchmark run found in '{root}'{}", prefix_suffix(.prefix))]
    RunNotFound {
        /// The results root that was scanned
        root: PathBuf,
        /// Optional run-name prefix that was requested
        prefix: Option<String>,
    },

    /// The selected run has no results file.
    #[error("results file '{file_name}' not found in '{run_dir}'")]
    ResultsFileNotFound {
        /// The run directory that was selected
        run_dir: PathBuf,
        /// The file name that was expected
        file_name: String,
    },

    /// The results file is malformed or contains no records.
    #[error("no benchmark data in '{path}': {reason}")]
    NoData {
        /// The file that was read
        path: PathBuf,
        /// Why nothing could be used
        reason: String,
    },

    /// Input file exceeds the configured size limit.
    #[error("file '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Its size in bytes
        actual: u64,
        /// The configured limit in bytes
        max: u64,
    },

    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path being accessed
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// A configuration value could not be used.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

fn prefix_suffix(prefix: &Option<String>) -> String {
    match prefix {
        Some(p) => format!(" matching prefix '{}'", p),
        None => String::new(),
    }
}

impl CoreError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a no-data error.
    pub fn no_data(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::NoData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for the three "nothing to read" discovery failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::ResultsDirNotFound { .. }
                | CoreError::RunNotFound { .. }
                | CoreError::ResultsFileNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = CoreError::ResultsDirNotFound {
            path: PathBuf::from("analysis/results"),
        };
        assert!(err.is_not_found());

        let err = CoreError::no_data("raw_results.json", "empty array");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_run_not_found_display() {
        let err = CoreError::RunNotFound {
            root: PathBuf::from("results"),
            prefix: Some("2025-01-02".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("results"));
        assert!(msg.contains("matching prefix '2025-01-02'"));

        let err = CoreError::RunNotFound {
            root: PathBuf::from("results"),
            prefix: None,
        };
        assert!(!err.to_string().contains("prefix"));
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CoreError::FileTooLarge {
            path: PathBuf::from("big.json"),
            actual: 2048,
            max: 1024,
        };
        let msg = err.to_string();
        assert!(msg.contains("2048"));
        assert!(msg.contains("1024"));
    }
}
