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

//! Centralized benchmark configuration.
//!
//! All knobs the matrix run depends on live here as explicit
//! configuration with documented defaults, rather than as constants
//! baked into the driver or the operation suite.

use crate::error::{validate_data_size, BenchError, Result};
use std::path::PathBuf;

/// Standard data-size matrix: 1k through 10M entries.
pub const STANDARD_SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Default number of timed trials per (operation, size) pair.
pub const DEFAULT_TRIALS: u32 = 10;

/// Default duplicate candidates: keys whose value mod 10 is in this
/// set are pre-seeded by the duplicate-insertion variants.
pub const DEFAULT_DUPLICATE_CANDIDATES: &[u64] = &[0, 5];

/// Default report file name.
pub const DEFAULT_OUTPUT_FILE: &str = "dictionary_output.csv";

/// Configuration for a full benchmark matrix run.
///
/// # Example
///
/// ```
/// use mapbench::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_sizes(&[1_000, 10_000])
///     .with_trials(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Data sizes to test, in execution order.
    pub sizes: Vec<usize>,
    /// Timed trials per (operation, size) pair.
    pub trials: u32,
    /// Last-digit values identifying keys to pre-seed in the
    /// duplicate-insertion variants.
    pub duplicate_candidates: Vec<u64>,
    /// Field delimiter for the exported report.
    pub delimiter: u8,
    /// Directory the report file is written into.
    pub output_dir: PathBuf,
}

impl BenchConfig {
    /// Creates a configuration with the given size matrix and all
    /// other fields at their defaults.
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            trials: DEFAULT_TRIALS,
            duplicate_candidates: DEFAULT_DUPLICATE_CANDIDATES.to_vec(),
            delimiter: b',',
            output_dir: PathBuf::from("."),
        }
    }

    /// Sets the data-size matrix.
    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    /// Sets the trial count per (operation, size) pair.
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the duplicate-candidate last digits.
    pub fn with_duplicate_candidates(mut self, candidates: &[u64]) -> Self {
        self.duplicate_candidates = candidates.to_vec();
        self
    }

    /// Sets the report field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the directory the report is written into.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Full path of the report file: `output_dir` joined with
    /// [`DEFAULT_OUTPUT_FILE`].
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(DEFAULT_OUTPUT_FILE)
    }

    /// Validates the configuration.
    ///
    /// Rejects empty size matrices, sizes beyond the supported limit,
    /// a zero trial count (the min/max sentinels must never reach a
    /// report), duplicate candidates that are not single digits, and
    /// non-ASCII delimiters (the report is UTF-8; a raw byte >= 0x80
    /// would corrupt it).
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::invalid_config(
                "sizes",
                "at least one data size is required",
            ));
        }
        for &size in &self.sizes {
            validate_data_size(size)?;
        }
        if self.trials == 0 {
            return Err(BenchError::invalid_config(
                "trials",
                "must be at least 1",
            ));
        }
        for &candidate in &self.duplicate_candidates {
            if candidate > 9 {
                return Err(BenchError::invalid_config(
                    "duplicate_candidates",
                    format!("{} is not a last digit (expected 0..=9)", candidate),
                ));
            }
        }
        if !self.delimiter.is_ascii() {
            return Err(BenchError::invalid_config(
                "delimiter",
                "must be a single ASCII character",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(STANDARD_SIZES)
    }
}
