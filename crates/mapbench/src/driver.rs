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

//! Matrix orchestration: runs every operation variant across every
//! configured data size and collects the report rows.

use crate::config::BenchConfig;
use crate::error::Result;
use crate::ops::{MapOp, MapOperationSuite, INSERTION_OPS, LOOKUP_OPS};
use crate::report;
use crate::stats::{TrialRecord, TrialStats};
use tracing::{debug, info};

/// Drives the full {operation} x {data size} matrix.
///
/// The run is single-threaded and synchronous; `run_all` executes to
/// completion before returning. Callers that need a cancellation point
/// between operations can invoke [`run_one`](BenchmarkDriver::run_one)
/// per variant instead.
pub struct BenchmarkDriver {
    config: BenchConfig,
    suite: MapOperationSuite,
    records: Vec<TrialRecord>,
}

impl BenchmarkDriver {
    /// Creates a driver after validating the configuration.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let suite = MapOperationSuite::new(&config.duplicate_candidates);
        Ok(Self {
            config,
            suite,
            records: Vec::new(),
        })
    }

    /// Runs the full matrix:
    ///
    /// 1. the four insertion variants with pre-sized backing storage,
    /// 2. the same four grown dynamically,
    /// 3. the four lookup variants (sizing flag not applicable).
    ///
    /// Returns all collected records in execution order. Any failure
    /// aborts the matrix; a partial record set is never reported.
    pub fn run_all(&mut self) -> Result<&[TrialRecord]> {
        for &op in INSERTION_OPS {
            self.run_one(op, true)?;
        }
        for &op in INSERTION_OPS {
            self.run_one(op, false)?;
        }
        for &op in LOOKUP_OPS {
            self.run_one(op, false)?;
        }
        Ok(&self.records)
    }

    /// Runs one operation variant across every configured size,
    /// appending one record per size and printing the per-operation
    /// summary. Returns the records added by this call.
    pub fn run_one(&mut self, op: MapOp, pre_sized: bool) -> Result<Vec<TrialRecord>> {
        let trials = self.config.trials;
        let mut added = Vec::with_capacity(self.config.sizes.len());

        for &size in &self.config.sizes {
            let mut stats = TrialStats::new();
            let mut sum_ms = 0.0;
            for _ in 0..trials {
                let elapsed_ms = self.suite.run(op, size, pre_sized)?;
                stats.record_sample(elapsed_ms);
                sum_ms += elapsed_ms;
            }
            stats.set_mean(sum_ms / f64::from(trials));

            debug!(
                op = op.name(),
                size,
                trials,
                mean_ms = stats.mean_ms(),
                "trial group complete"
            );
            added.push(TrialRecord::from_stats(op.name(), size, trials, &stats));
        }

        report::print_operation_summary(
            op.name(),
            op.is_insertion().then_some(pre_sized),
            &added,
        );
        info!(op = op.name(), rows = added.len(), "operation complete");

        self.records.extend(added.iter().cloned());
        Ok(added)
    }

    /// All records collected so far, in execution order.
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// The driver's configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Consumes the driver, yielding the collected records.
    pub fn into_records(self) -> Vec<TrialRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    fn small_config() -> BenchConfig {
        BenchConfig::default().with_sizes(&[10, 100]).with_trials(2)
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let result = BenchmarkDriver::new(BenchConfig::default().with_trials(0));
        assert!(matches!(result, Err(BenchError::InvalidConfig { .. })));
    }

    #[test]
    fn test_run_one_scenario() {
        // n = 1000, 3 trials, pre-sized insert-if-absent.
        let config = BenchConfig::default().with_sizes(&[1_000]).with_trials(3);
        let mut driver = BenchmarkDriver::new(config).unwrap();

        let records = driver.run_one(MapOp::InsertIfAbsent, true).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.method_name, "insert_if_absent");
        assert_eq!(record.data_size, 1_000);
        assert_eq!(record.trial_count, 3);
        assert!(record.min_ms >= 0.0);
        assert!(record.min_ms <= record.mean_ms);
        assert!(record.mean_ms <= record.max_ms);
    }

    #[test]
    fn test_run_one_emits_one_record_per_size() {
        let mut driver = BenchmarkDriver::new(small_config()).unwrap();
        let records = driver.run_one(MapOp::LookupExisting, false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data_size, 10);
        assert_eq!(records[1].data_size, 100);
    }

    #[test]
    fn test_run_one_is_structurally_idempotent() {
        let mut driver = BenchmarkDriver::new(small_config()).unwrap();
        let first = driver.run_one(MapOp::CheckThenInsert, false).unwrap();
        let second = driver.run_one(MapOp::CheckThenInsert, false).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.method_name, b.method_name);
            assert_eq!(a.data_size, b.data_size);
            assert_eq!(a.trial_count, b.trial_count);
        }
    }

    #[test]
    fn test_run_all_covers_full_matrix_in_order() {
        let mut driver = BenchmarkDriver::new(small_config()).unwrap();
        let records = driver.run_all().unwrap().to_vec();

        // 4 insertion ops twice + 4 lookup ops, 2 sizes each.
        assert_eq!(records.len(), 12 * 2);

        // Phase 1 and 2 repeat the insertion labels; phase 3 is lookups.
        assert_eq!(records[0].method_name, "insert_if_absent");
        assert_eq!(records[8].method_name, "insert_if_absent");
        assert_eq!(records[16].method_name, "lookup_existing");
        assert_eq!(records[23].method_name, "lookup_missing_with_membership_check");

        // Sizes cycle within each operation block.
        assert_eq!(records[0].data_size, 10);
        assert_eq!(records[1].data_size, 100);
    }

    #[test]
    fn test_zero_size_matrix_entry_completes() {
        let config = BenchConfig::default().with_sizes(&[0]).with_trials(1);
        let mut driver = BenchmarkDriver::new(config).unwrap();
        let records = driver.run_all().unwrap();
        assert_eq!(records.len(), 12);
        for record in records {
            assert_eq!(record.data_size, 0);
            assert!(record.mean_ms >= 0.0);
        }
    }
}
