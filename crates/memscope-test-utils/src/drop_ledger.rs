// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared drop counters for observing deallocation from tests.

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter recording how many tracked values have been dropped.
///
/// A `DropLedger` mints [`DropWitness`] values; every witness reports its
/// destruction back to the ledger that minted it. The ledger is a cheap
/// clone of the underlying counter, so it stays observable after the
/// witnesses have moved into the code under test.
///
/// # Example
///
/// ```rust
/// use memscope_test_utils::DropLedger;
///
/// let ledger = DropLedger::new();
/// let witness = ledger.witness();
///
/// assert_eq!(ledger.drops(), 0);
/// drop(witness);
/// assert_eq!(ledger.drops(), 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DropLedger(Rc<Cell<usize>>);

impl DropLedger {
    /// Creates a ledger with zero recorded drops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of witness destructors that have run so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }

    /// Resets the recorded count to zero.
    pub fn reset(&mut self) {
        self.0.set(0);
    }

    /// Mints a value that reports its destruction to this ledger.
    pub fn witness(&self) -> DropWitness {
        DropWitness(Rc::clone(&self.0))
    }
}

/// A value whose destructor increments the [`DropLedger`] it was minted from.
///
/// Dropping a witness twice is impossible in safe code; a ledger count above
/// the number of minted witnesses therefore proves a double free in the
/// `unsafe` code under test.
#[derive(Debug)]
pub struct DropWitness(Rc<Cell<usize>>);

impl Drop for DropWitness {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
