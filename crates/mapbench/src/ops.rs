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

//! The timed map-operation variants.
//!
//! Each variant builds a brand-new `HashMap<u64, u64>` per invocation
//! and times exactly one access pattern over the keys `0..n`:
//!
//! - insertion via a try-insert primitive vs. an explicit
//!   membership check followed by a write, each with and without a
//!   duplicate pre-population pass;
//! - lookups that hit every key vs. lookups that miss every key, via
//!   a plain `get` or a membership-guarded read.
//!
//! Setup work (pre-population, lookup-table construction) is always
//! excluded from the timed interval. Insertion variants honor the
//! pre-sizing flag through `HashMap::with_capacity`; lookup variants
//! accept the flag but ignore it, since their table's sizing policy is
//! not under test.

use crate::error::{validate_data_size, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hint::black_box;
use std::time::Instant;

/// The closed set of operation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapOp {
    /// Try-insert every key with value 0.
    InsertIfAbsent,
    /// Try-insert with a fallback overwrite; duplicate keys pre-seeded.
    InsertIfAbsentWithDuplicates,
    /// Membership check, then overwrite or insert.
    CheckThenInsert,
    /// Check-then-insert with duplicate keys pre-seeded.
    CheckThenInsertWithDuplicates,
    /// `get` for every key of a fully populated table (all hits).
    LookupExisting,
    /// `get` for keys shifted past the table's range (all misses).
    LookupMissing,
    /// Membership-guarded read, all hits.
    LookupExistingWithMembershipCheck,
    /// Membership-guarded read, all misses.
    LookupMissingWithMembershipCheck,
}

/// Insertion variants, in matrix execution order.
pub const INSERTION_OPS: &[MapOp] = &[
    MapOp::InsertIfAbsent,
    MapOp::InsertIfAbsentWithDuplicates,
    MapOp::CheckThenInsert,
    MapOp::CheckThenInsertWithDuplicates,
];

/// Lookup variants, in matrix execution order.
pub const LOOKUP_OPS: &[MapOp] = &[
    MapOp::LookupExisting,
    MapOp::LookupMissing,
    MapOp::LookupExistingWithMembershipCheck,
    MapOp::LookupMissingWithMembershipCheck,
];

impl MapOp {
    /// Fixed row label used in reports and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            MapOp::InsertIfAbsent => "insert_if_absent",
            MapOp::InsertIfAbsentWithDuplicates => "insert_if_absent_with_duplicates",
            MapOp::CheckThenInsert => "check_then_insert",
            MapOp::CheckThenInsertWithDuplicates => "check_then_insert_with_duplicates",
            MapOp::LookupExisting => "lookup_existing",
            MapOp::LookupMissing => "lookup_missing",
            MapOp::LookupExistingWithMembershipCheck => "lookup_existing_with_membership_check",
            MapOp::LookupMissingWithMembershipCheck => "lookup_missing_with_membership_check",
        }
    }

    /// Whether the pre-sizing flag applies to this variant.
    pub fn is_insertion(&self) -> bool {
        matches!(
            self,
            MapOp::InsertIfAbsent
                | MapOp::InsertIfAbsentWithDuplicates
                | MapOp::CheckThenInsert
                | MapOp::CheckThenInsertWithDuplicates
        )
    }
}

/// Try-insert primitive: inserts only when the key is absent and
/// reports whether the insert happened.
#[inline]
fn try_add(map: &mut HashMap<u64, u64>, key: u64, value: u64) -> bool {
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
    }
}

/// Whether a key's last digit is in the duplicate-candidate set.
#[inline]
fn is_duplicate_candidate(key: u64, candidates: &[u64]) -> bool {
    candidates.contains(&(key % 10))
}

fn new_map(n: usize, pre_sized: bool) -> HashMap<u64, u64> {
    if pre_sized {
        HashMap::with_capacity(n)
    } else {
        HashMap::new()
    }
}

/// Lookup table for the lookup variants: every key in `0..n` mapped
/// to 1, built with try-insert semantics and never pre-sized.
fn build_lookup_table(n: usize) -> HashMap<u64, u64> {
    let mut map = HashMap::new();
    for i in 0..n as u64 {
        try_add(&mut map, i, 1);
    }
    map
}

/// Executes the timed operation variants.
///
/// Holds the duplicate-candidate set so that every variant sees the
/// same pre-population rule across the whole matrix.
#[derive(Debug, Clone)]
pub struct MapOperationSuite {
    duplicate_candidates: Vec<u64>,
}

impl MapOperationSuite {
    /// Creates a suite with the given duplicate-candidate last digits.
    pub fn new(duplicate_candidates: &[u64]) -> Self {
        Self {
            duplicate_candidates: duplicate_candidates.to_vec(),
        }
    }

    /// Runs one variant over `n` keys and returns the elapsed time of
    /// the timed region in milliseconds.
    pub fn run(&self, op: MapOp, n: usize, pre_sized: bool) -> Result<f64> {
        validate_data_size(n)?;
        let (elapsed_ms, _map) = match op {
            MapOp::InsertIfAbsent => self.insert_if_absent(n, pre_sized),
            MapOp::InsertIfAbsentWithDuplicates => {
                self.insert_if_absent_with_duplicates(n, pre_sized)
            }
            MapOp::CheckThenInsert => self.check_then_insert(n, pre_sized),
            MapOp::CheckThenInsertWithDuplicates => {
                self.check_then_insert_with_duplicates(n, pre_sized)
            }
            MapOp::LookupExisting => self.lookup_existing(n),
            MapOp::LookupMissing => self.lookup_missing(n),
            MapOp::LookupExistingWithMembershipCheck => {
                self.lookup_existing_with_membership_check(n)
            }
            MapOp::LookupMissingWithMembershipCheck => self.lookup_missing_with_membership_check(n),
        };
        Ok(elapsed_ms)
    }

    /// Variant 1: try-insert every key with value 0.
    fn insert_if_absent(&self, n: usize, pre_sized: bool) -> (f64, HashMap<u64, u64>) {
        let mut map = new_map(n, pre_sized);

        let timer = Instant::now();
        for i in 0..n as u64 {
            try_add(&mut map, i, 0);
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 2: duplicate keys pre-seeded to 1 (untimed), then a
    /// timed pass that try-inserts 0 and overwrites to 0 on collision.
    fn insert_if_absent_with_duplicates(
        &self,
        n: usize,
        pre_sized: bool,
    ) -> (f64, HashMap<u64, u64>) {
        let mut map = new_map(n, pre_sized);
        self.seed_duplicates_try_add(&mut map, n);

        let timer = Instant::now();
        for i in 0..n as u64 {
            if !try_add(&mut map, i, 0) {
                map.insert(i, 0);
            }
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 3: membership check on every key, then an
    /// indexer-style overwrite or a fresh insert.
    fn check_then_insert(&self, n: usize, pre_sized: bool) -> (f64, HashMap<u64, u64>) {
        let mut map = new_map(n, pre_sized);

        let timer = Instant::now();
        for i in 0..n as u64 {
            if map.contains_key(&i) {
                // The overwrite goes through a second lookup; the
                // check-plus-write cost is the pattern under test.
                if let Some(slot) = map.get_mut(&i) {
                    *slot = 0;
                }
            } else {
                map.insert(i, 0);
            }
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 4: duplicate keys pre-seeded via the check-then-insert
    /// pattern (untimed), then the same timed loop as variant 3.
    fn check_then_insert_with_duplicates(
        &self,
        n: usize,
        pre_sized: bool,
    ) -> (f64, HashMap<u64, u64>) {
        let mut map = new_map(n, pre_sized);
        for i in 0..n as u64 {
            if is_duplicate_candidate(i, &self.duplicate_candidates) {
                if map.contains_key(&i) {
                    if let Some(slot) = map.get_mut(&i) {
                        *slot = 1;
                    }
                } else {
                    map.insert(i, 1);
                }
            }
        }

        let timer = Instant::now();
        for i in 0..n as u64 {
            if map.contains_key(&i) {
                if let Some(slot) = map.get_mut(&i) {
                    *slot = 0;
                }
            } else {
                map.insert(i, 0);
            }
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 5: `get` for every key of a fully populated table.
    fn lookup_existing(&self, n: usize) -> (f64, HashMap<u64, u64>) {
        let map = build_lookup_table(n);

        let timer = Instant::now();
        for i in 0..n as u64 {
            black_box(map.get(&i));
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 6: `get` for keys shifted past the table's range, so
    /// every probe misses.
    fn lookup_missing(&self, n: usize) -> (f64, HashMap<u64, u64>) {
        let map = build_lookup_table(n);
        let n = n as u64;

        let timer = Instant::now();
        for i in 0..n {
            let key = i + n;
            black_box(map.get(&key));
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 7: membership check, then an indexed read. All hits.
    fn lookup_existing_with_membership_check(&self, n: usize) -> (f64, HashMap<u64, u64>) {
        let map = build_lookup_table(n);

        let timer = Instant::now();
        for i in 0..n as u64 {
            if map.contains_key(&i) {
                black_box(map[&i]);
            }
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Variant 8: membership-guarded read against out-of-range keys,
    /// so the guard fails on every iteration.
    fn lookup_missing_with_membership_check(&self, n: usize) -> (f64, HashMap<u64, u64>) {
        let map = build_lookup_table(n);
        let n = n as u64;

        let timer = Instant::now();
        for i in 0..n {
            let key = i + n;
            if map.contains_key(&key) {
                black_box(map[&key]);
            }
        }
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1_000.0;

        (elapsed_ms, map)
    }

    /// Untimed duplicate pre-population using the try-insert primitive.
    fn seed_duplicates_try_add(&self, map: &mut HashMap<u64, u64>, n: usize) {
        for i in 0..n as u64 {
            if is_duplicate_candidate(i, &self.duplicate_candidates) {
                try_add(map, i, 1);
            }
        }
    }
}
