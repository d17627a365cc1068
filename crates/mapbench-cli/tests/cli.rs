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

//! End-to-end tests for the `mapbench` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn mapbench() -> Command {
    Command::cargo_bin("mapbench").expect("binary should build")
}

#[test]
fn test_writes_report_with_default_name() {
    let dir = tempfile::tempdir().unwrap();

    mapbench()
        .args(["--sizes", "10,20", "--trials", "2", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dictionary_output.csv"));

    let report = dir.path().join("dictionary_output.csv");
    let contents = std::fs::read_to_string(report).unwrap();
    assert!(contents.starts_with("MethodName,DataSize,TrialCount,MeanMs,MaxMs,MinMs"));
    // Header plus 12 operations x 2 sizes.
    assert_eq!(contents.lines().count(), 1 + 24);
}

#[test]
fn test_prints_per_operation_summaries() {
    let dir = tempfile::tempdir().unwrap();

    mapbench()
        .args(["--sizes", "10", "--trials", "1", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("insert_if_absent"))
        .stdout(predicate::str::contains("lookup_missing_with_membership_check"))
        .stdout(predicate::str::contains("capacity preset to n"))
        .stdout(predicate::str::contains("grown dynamically"));
}

#[test]
fn test_custom_delimiter_is_honored() {
    let dir = tempfile::tempdir().unwrap();

    mapbench()
        .args(["--sizes", "10", "--trials", "1", "--delimiter", ";", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success();

    let contents = std::fs::read_to_string(dir.path().join("dictionary_output.csv")).unwrap();
    assert!(contents.starts_with("MethodName;DataSize;TrialCount;MeanMs;MaxMs;MinMs"));
}

#[test]
fn test_zero_trials_is_rejected() {
    mapbench()
        .args(["--sizes", "10", "--trials", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("trials"));
}

#[test]
fn test_non_ascii_delimiter_is_rejected() {
    mapbench()
        .args(["--sizes", "10", "--trials", "1", "--delimiter", "\u{20ac}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter"));
}

#[test]
fn test_latin1_delimiter_is_rejected_and_writes_nothing() {
    // U+00E9 fits in a u8, but its raw byte is not valid UTF-8; it
    // must be rejected up front, before any report is written.
    let dir = tempfile::tempdir().unwrap();

    mapbench()
        .args(["--sizes", "10", "--trials", "1", "--delimiter", "\u{e9}", "--output-dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter"));

    assert!(!dir.path().join("dictionary_output.csv").exists());
}
