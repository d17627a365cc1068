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

//! Command-line driver for the mapbench harness.
//!
//! Runs the full benchmark matrix once and writes the delimited report
//! into the chosen output directory.
//!
//! # Examples
//!
//! ```bash
//! # Full default matrix (1k..10M entries, 10 trials each)
//! mapbench
//!
//! # Quick run into a scratch directory
//! mapbench --sizes 1000,10000 --trials 3 --output-dir /tmp
//!
//! # Semicolon-delimited report
//! mapbench --delimiter ';'
//! ```

use clap::Parser;
use mapbench::{
    BenchConfig, BenchError, BenchmarkDriver, ReportWriter, DEFAULT_DUPLICATE_CANDIDATES,
    DEFAULT_TRIALS, STANDARD_SIZES,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Wall-clock micro-benchmarks for key-value map strategies.
#[derive(Parser)]
#[command(name = "mapbench")]
#[command(author, version, about = "Key-value map insertion/lookup micro-benchmarks", long_about = None)]
struct Cli {
    /// Data sizes to benchmark, comma-separated.
    #[arg(long, value_delimiter = ',', default_values_t = STANDARD_SIZES.to_vec())]
    sizes: Vec<usize>,

    /// Timed trials per (operation, size) pair.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u32,

    /// Last digits of keys pre-seeded by the duplicate-insertion
    /// variants, comma-separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_DUPLICATE_CANDIDATES.to_vec())]
    duplicate_candidates: Vec<u64>,

    /// Directory the report file is written into.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Field delimiter for the report.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(path) => {
            println!("\nreport written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf, BenchError> {
    // u8::try_from alone would admit Latin-1 code points up to U+00FF,
    // whose raw bytes are not valid UTF-8 in the report.
    if !cli.delimiter.is_ascii() {
        return Err(BenchError::invalid_config(
            "delimiter",
            "must be a single ASCII character",
        ));
    }
    let delimiter = cli.delimiter as u8;

    let config = BenchConfig::new(&cli.sizes)
        .with_trials(cli.trials)
        .with_duplicate_candidates(&cli.duplicate_candidates)
        .with_delimiter(delimiter)
        .with_output_dir(cli.output_dir);
    let path = config.output_path();

    let mut driver = BenchmarkDriver::new(config)?;
    driver.run_all()?;

    ReportWriter::new(delimiter).export_all(driver.records(), &path)?;
    tracing::info!(path = %path.display(), rows = driver.records().len(), "report exported");
    Ok(path)
}
