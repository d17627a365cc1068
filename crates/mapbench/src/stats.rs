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

//! Per-trial timing statistics and the immutable report row.

use serde::{Deserialize, Serialize};

/// Accumulates min/max over the timing samples of one
/// (operation, data size) pair.
///
/// Created fresh at the start of each trial loop, fed via
/// [`record_sample`](TrialStats::record_sample), finalized once via
/// [`set_mean`](TrialStats::set_mean), then read-only. The mean is
/// computed externally by the driver as the arithmetic average of all
/// samples; it is not maintained incrementally here.
#[derive(Debug, Clone)]
pub struct TrialStats {
    mean_ms: f64,
    max_ms: f64,
    min_ms: f64,
    samples: u32,
}

impl TrialStats {
    /// Creates an empty accumulator with sentinel extremes.
    pub fn new() -> Self {
        Self {
            mean_ms: 0.0,
            max_ms: f64::MIN,
            min_ms: f64::MAX,
            samples: 0,
        }
    }

    /// Records one timing sample, widening min/max as needed.
    pub fn record_sample(&mut self, elapsed_ms: f64) {
        if elapsed_ms > self.max_ms {
            self.max_ms = elapsed_ms;
        }
        if elapsed_ms < self.min_ms {
            self.min_ms = elapsed_ms;
        }
        self.samples += 1;
    }

    /// Sets the externally computed mean. Called exactly once, after
    /// the final sample.
    pub fn set_mean(&mut self, mean_ms: f64) {
        debug_assert!(self.samples > 0, "mean set before any sample was recorded");
        self.mean_ms = mean_ms;
    }

    /// Mean trial time in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.mean_ms
    }

    /// Slowest trial in milliseconds. Remains at the `f64::MIN`
    /// sentinel until the first sample.
    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Fastest trial in milliseconds. Remains at the `f64::MAX`
    /// sentinel until the first sample.
    pub fn min_ms(&self) -> f64 {
        self.min_ms
    }

    /// Number of samples recorded so far.
    pub fn samples(&self) -> u32 {
        self.samples
    }
}

impl Default for TrialStats {
    fn default() -> Self {
        Self::new()
    }
}

/// One finished report row: the summary of all trials for a single
/// (operation, data size) pair. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Row label of the operation variant.
    pub method_name: String,
    /// Number of map entries exercised per trial.
    pub data_size: usize,
    /// Number of timed trials behind the statistics.
    pub trial_count: u32,
    /// Arithmetic mean of all trials, in milliseconds.
    pub mean_ms: f64,
    /// Slowest trial, in milliseconds.
    pub max_ms: f64,
    /// Fastest trial, in milliseconds.
    pub min_ms: f64,
}

impl TrialRecord {
    /// Builds a record from finalized statistics.
    pub fn from_stats(
        method_name: impl Into<String>,
        data_size: usize,
        trial_count: u32,
        stats: &TrialStats,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            data_size,
            trial_count,
            mean_ms: stats.mean_ms(),
            max_ms: stats.max_ms(),
            min_ms: stats.min_ms(),
        }
    }
}
