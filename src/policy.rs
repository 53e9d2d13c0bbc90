// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failure-reporting policies.
//!
//! A [`Deque`](crate::Deque) calls [`ErrorPolicy::report`] once for every
//! operation it rejects, right before handing the [`Error`] back to the
//! caller. The policy is a type parameter, so the choice costs nothing at
//! runtime:
//!
//! - [`Propagate`] (the default) only returns the error.
//! - [`Panic`] turns every rejected operation into a panic, the equivalent of
//!   an assertion failure.
//! - `Trace` (feature `tracing`) emits a `tracing` warning and then returns the
//!   error.
//!
//! ```rust
//! use ring_deque::{Deque, policy::Panic};
//!
//! let mut d: Deque<u8, 1, Panic> = Deque::new();
//! d.push_back(1).unwrap();
//! let overflow = std::panic::catch_unwind(move || {
//!     let _ = d.push_back(2);
//! });
//! assert!(overflow.is_err());
//! ```

// Crate imports
use crate::error::Error;

/// Hook invoked for every rejected operation.
pub trait ErrorPolicy {
    /// Observes `error` before it is returned to the caller.
    fn report(error: &Error);
}

/// Returns the error without any other side effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Propagate;

impl ErrorPolicy for Propagate {
    #[inline(always)]
    fn report(_: &Error) {}
}

/// Panics with the error message and the caller's location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Panic;

impl ErrorPolicy for Panic {
    #[cold]
    fn report(error: &Error) {
        panic!("{error}");
    }
}

/// Logs the error as a `tracing` warning, then returns it.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Trace;

#[cfg(feature = "tracing")]
impl ErrorPolicy for Trace {
    #[cold]
    fn report(error: &Error) {
        tracing::warn!(
            kind = %error.kind(),
            message = error.message(),
            file = error.location().file(),
            line = error.location().line(),
            "deque operation rejected"
        );
    }
}
