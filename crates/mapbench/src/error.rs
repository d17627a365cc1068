// Mapbench - Key-Value Map Micro-Benchmarks
//
// Copyright (c) 2026 Mapbench contributors.
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

//! Error types for benchmark operations.
//!
//! A failed trial invalidates the whole matrix, so every error here is
//! fatal: nothing is retried, and nothing is logged-and-swallowed. A
//! partially completed run must never produce a plausible-looking report.

use std::path::PathBuf;
use thiserror::Error;

/// Maximum supported data size per trial (10 million entries).
///
/// This is the largest size in the default matrix. Sizes beyond it are
/// rejected up front so that a run fails with a descriptive error
/// instead of an allocation failure mid-matrix.
pub const MAX_DATA_SIZE: usize = 10_000_000;

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while configuring, running, or exporting a benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Requested data size exceeds [`MAX_DATA_SIZE`].
    #[error("data size {requested} exceeds the maximum supported size of {max}")]
    SizeOverflow {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// A configuration parameter failed validation.
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O failure during report export. The in-memory records remain
    /// available to the caller for retry or alternate export.
    #[error("I/O error for '{path}': {source}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure during report export.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl BenchError {
    /// Creates a [`BenchError::Io`] with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a [`BenchError::InvalidConfig`] for a named parameter.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Validates that a data size is within the supported limit.
///
/// # Examples
///
/// ```
/// use mapbench::error::{validate_data_size, MAX_DATA_SIZE};
///
/// assert!(validate_data_size(1_000).is_ok());
/// assert!(validate_data_size(MAX_DATA_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_data_size(size: usize) -> Result<()> {
    if size > MAX_DATA_SIZE {
        Err(BenchError::SizeOverflow {
            requested: size,
            max: MAX_DATA_SIZE,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_data_size_success() {
        assert!(validate_data_size(0).is_ok());
        assert!(validate_data_size(10_000).is_ok());
        assert!(validate_data_size(MAX_DATA_SIZE).is_ok());
    }

    #[test]
    fn test_validate_data_size_failure() {
        let result = validate_data_size(MAX_DATA_SIZE + 1);
        match result {
            Err(BenchError::SizeOverflow { requested, max }) => {
                assert_eq!(requested, MAX_DATA_SIZE + 1);
                assert_eq!(max, MAX_DATA_SIZE);
            }
            other => panic!("expected SizeOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = BenchError::SizeOverflow {
            requested: 20_000_000,
            max: MAX_DATA_SIZE,
        };
        let msg = err.to_string();
        assert!(msg.contains("20000000"));
        assert!(msg.contains("10000000"));

        let err = BenchError::invalid_config("trials", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("trials"));
        assert!(msg.contains("must be at least 1"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = BenchError::io(
            "out/report.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/report.csv"));
    }
}
