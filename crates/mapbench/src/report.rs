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

//! Report serialization and console summaries.
//!
//! The delimited report is held entirely in memory and written in one
//! shot at the end of the run; rows appear in matrix execution order.

use crate::error::{BenchError, Result};
use crate::stats::TrialRecord;
use std::fs::File;
use std::path::Path;

/// Fixed report columns, in order.
pub const REPORT_COLUMNS: [&str; 6] = [
    "MethodName",
    "DataSize",
    "TrialCount",
    "MeanMs",
    "MaxMs",
    "MinMs",
];

/// Renders [`TrialRecord`]s as delimited text and performs the
/// one-time export.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    delimiter: u8,
}

impl ReportWriter {
    /// Creates a writer with the given field delimiter.
    ///
    /// The delimiter must be ASCII: the report is UTF-8, and for a
    /// byte >= 0x80 the string renderers and the file export would
    /// disagree on its encoding. [`BenchConfig::validate`] enforces
    /// this for driver-assembled configurations.
    ///
    /// [`BenchConfig::validate`]: crate::config::BenchConfig::validate
    pub fn new(delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii(), "report delimiter must be ASCII");
        Self { delimiter }
    }

    /// The fixed 6-column header line.
    pub fn header(&self) -> String {
        REPORT_COLUMNS.join(&(self.delimiter as char).to_string())
    }

    /// Renders one record using the header's delimiter and column order.
    pub fn format_row(&self, record: &TrialRecord) -> String {
        fields(record).join(&(self.delimiter as char).to_string())
    }

    /// Full report (header plus all rows) as a single string, one line
    /// per row. Usable by callers that need to retry a failed export.
    pub fn write_to_string(&self, records: &[TrialRecord]) -> String {
        let mut out = String::new();
        out.push_str(&self.header());
        out.push('\n');
        for record in records {
            out.push_str(&self.format_row(record));
            out.push('\n');
        }
        out
    }

    /// Writes header and all rows to `path` in one scoped acquisition:
    /// the file handle is flushed and released whether or not the
    /// write succeeds.
    pub fn export_all(&self, records: &[TrialRecord], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(file);

        wtr.write_record(REPORT_COLUMNS)?;
        for record in records {
            wtr.write_record(fields(record))?;
        }
        wtr.flush().map_err(|e| BenchError::io(path, e))?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(b',')
    }
}

/// Field values of a record, in column order. `f64` `Display` is used
/// for the timing columns; it round-trips exactly through `parse`.
fn fields(record: &TrialRecord) -> [String; 6] {
    [
        record.method_name.clone(),
        record.data_size.to_string(),
        record.trial_count.to_string(),
        record.mean_ms.to_string(),
        record.max_ms.to_string(),
        record.min_ms.to_string(),
    ]
}

/// Prints the human-readable per-operation summary: one block per
/// operation listing every data-size result, stating the pre-sizing
/// condition. `pre_sized` is `None` for lookup variants, whose table
/// sizing is not under test.
pub fn print_operation_summary(op_name: &str, pre_sized: Option<bool>, records: &[TrialRecord]) {
    let trials = records.first().map(|r| r.trial_count).unwrap_or(0);
    let condition = match pre_sized {
        Some(true) => "capacity preset to n",
        Some(false) => "grown dynamically",
        None => "n/a (lookup table built untimed)",
    };

    println!("\n{}", "-".repeat(72));
    println!(
        "{} ({} trials per size) || backing storage: {}",
        op_name, trials, condition
    );
    println!("{}", "-".repeat(72));
    for record in records {
        println!(
            "  size {:>10} || mean {:.4} ms || max {:.4} ms || min {:.4} ms",
            record.data_size, record.mean_ms, record.max_ms, record.min_ms
        );
    }
}
