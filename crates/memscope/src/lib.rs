// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # memscope
//!
//! Scoped exclusive-ownership wrappers for raw heap allocations.
//!
//! This crate provides two structurally identical primitives:
//!
//! - [`ScopedPtr<T>`] owns a single heap-allocated object (`*mut T`).
//! - [`ScopedArray<T>`] owns a contiguous heap-allocated sequence
//!   (`*mut [T]`).
//!
//! Both adopt an already-allocated raw pointer, deallocate it exactly once
//! when they go out of scope, and never deallocate at all if ownership was
//! handed back through `release()` first. Neither wrapper can be cloned,
//! copied, or compared against another wrapper; duplicated ownership is a
//! double free waiting to happen, so it is rejected at compile time.
//!
//! The wrappers never allocate. The allocation side of the contract is
//! `Box::into_raw` (on a `Box<T>` for [`ScopedPtr`], on a `Box<[T]>` for
//! [`ScopedArray`]), and the matching deallocation runs in the wrapper's
//! `Drop`. Because the two wrappers adopt pointers of different types,
//! freeing an allocation with the wrong primitive does not compile.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod scoped_array;
mod scoped_ptr;

#[cfg(test)]
mod tests;

pub use scoped_array::ScopedArray;
pub use scoped_ptr::ScopedPtr;
