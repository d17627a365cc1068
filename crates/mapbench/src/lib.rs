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

//! Mapbench: wall-clock micro-benchmarks for key-value map strategies.
//!
//! Measures and reports timing characteristics of several `HashMap`
//! insertion and lookup patterns across a matrix of data sizes:
//!
//! - **Insertion**: try-insert vs. check-then-insert, with and without
//!   duplicate-key pre-population, pre-sized and dynamically grown.
//! - **Lookup**: plain `get` vs. membership-guarded reads, against
//!   all-hit and all-miss key sets.
//!
//! ## Usage
//!
//! ```no_run
//! use mapbench::{BenchConfig, BenchmarkDriver, ReportWriter};
//!
//! # fn main() -> mapbench::error::Result<()> {
//! let config = BenchConfig::default();
//! let path = config.output_path();
//! let delimiter = config.delimiter;
//!
//! let mut driver = BenchmarkDriver::new(config)?;
//! driver.run_all()?;
//!
//! ReportWriter::new(delimiter).export_all(driver.records(), path)?;
//! # Ok(())
//! # }
//! ```
//!
//! The harness is single-threaded and deliberately simple: repeated
//! timed trials, min/max/mean aggregation, and one delimited report
//! written at the end of the run.

pub mod config;
pub mod driver;
pub mod error;
pub mod ops;
pub mod report;
pub mod stats;

// Re-export key types for convenience
pub use config::{
    BenchConfig, DEFAULT_DUPLICATE_CANDIDATES, DEFAULT_OUTPUT_FILE, DEFAULT_TRIALS, STANDARD_SIZES,
};
pub use driver::BenchmarkDriver;
pub use error::{validate_data_size, BenchError, Result, MAX_DATA_SIZE};
pub use ops::{MapOp, MapOperationSuite, INSERTION_OPS, LOOKUP_OPS};
pub use report::{print_operation_summary, ReportWriter, REPORT_COLUMNS};
pub use stats::{TrialRecord, TrialStats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_small_matrix() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::default()
            .with_sizes(&[10, 50])
            .with_trials(2)
            .with_output_dir(dir.path());
        let path = config.output_path();
        let delimiter = config.delimiter;

        let mut driver = BenchmarkDriver::new(config).unwrap();
        driver.run_all().unwrap();

        let writer = ReportWriter::new(delimiter);
        writer.export_all(driver.records(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // Header plus 12 operations x 2 sizes.
        assert_eq!(lines.len(), 1 + 24);
        assert_eq!(lines[0], writer.header());
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), 6);
        }
    }
}
