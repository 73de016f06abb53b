// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for memscope crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod drop_ledger;

pub use drop_ledger::{DropLedger, DropWitness};
