// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `ring-deque`
//!
//! A `no_std`, fixed-capacity, allocation-free double-ended queue stored in a
//! circular buffer.
//!
//! The core type, [`Deque<T, N>`], holds up to `N` elements inline and tracks
//! a logical window `start .. start + len` inside a ring of `N + 1` slots.
//! Pushes and pops at either end are O(1); inserting or erasing in the middle
//! moves whichever side of the position is shorter.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know the maximum queue length at compile time.
//! - You need cheap access to both ends, and occasionally to the middle.
//!
//! It may not be the best fit if:
//!
//! - You need the queue to grow; use `alloc::collections::VecDeque`.
//! - You frequently move deques by value (moving a `Deque` moves the entire
//!   buffer, not just the live elements).
//!
//! ## Storage
//!
//! - Storage is `N + 1` slots of [`core::mem::MaybeUninit<T>`]; only the live
//!   window is ever read or dropped.
//! - The extra slot keeps [`Deque::end`] distinct from [`Deque::begin`] even
//!   when the deque is full, so a pair of positions always tells "full" from
//!   "empty".
//! - Elements are constructed in place and destroyed exactly once. Types
//!   without drop glue skip the destruction loops entirely.
//!
//! ## Errors and policies
//!
//! Operations that can exceed the capacity or address a missing element
//! return [`Error`], tagged with an [`ErrorKind`] and the caller's source
//! location, and leave the deque unchanged. Each deque type also carries an
//! [`ErrorPolicy`] that observes every failure before it is returned:
//!
//! - [`policy::Propagate`] (default): just return the error.
//! - [`policy::Panic`]: panic, the way an assertion would.
//! - `policy::Trace` (feature `tracing`): log a `tracing` warning.
//!
//! The `unsafe` `*_unchecked` methods skip the checks entirely.
//!
//! Indexing with `deque[i]` panics on out-of-range indices, exactly like
//! slices.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `Deque<T, N, P>` as a sequence
//!   of at most `N` elements.
//! - `tracing`: enables the [`policy`] `Trace` variant.
//!
//! ## Example
//!
//! ```rust
//! use ring_deque::{Deque, ErrorKind};
//!
//! let mut d: Deque<i32, 4> = Deque::new();
//! for v in 1..=4 {
//!     d.push_back(v).unwrap();
//! }
//! assert!(d.is_full());
//! assert_eq!(d.push_front(0).unwrap_err().kind(), ErrorKind::Length);
//!
//! assert_eq!(d.pop_front(), Some(1));
//! d.push_back(5).unwrap();
//! assert_eq!(d.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
//! assert_eq!(d.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2]);
//!
//! assert_eq!(d.end() - d.begin(), 4);
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod circular;
mod cursor;
mod deque;
mod error;
mod index;
mod iter;
pub mod policy;
mod ring;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use circular::CircularIter;
pub use cursor::Cursor;
pub use deque::Deque;
pub use error::{Error, ErrorKind};
pub use iter::{IntoIter, Iter, IterMut};
pub use policy::ErrorPolicy;
