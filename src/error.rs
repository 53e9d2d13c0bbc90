// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Deque`](crate::Deque).
//!
//! Every rejected operation produces an [`Error`] carrying its [`ErrorKind`],
//! a static message, and the source location of the call that failed. Errors
//! are `Copy` and implement `core::error::Error`.

// Core imports
use core::{fmt, panic::Location};

/// Classification of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The operation would exceed the fixed capacity (`N`).
    Length,
    /// An index or position was outside the current logical bounds.
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => f.write_str("length error"),
            Self::OutOfRange => f.write_str("out of range"),
        }
    }
}

/// Error returned by fallible [`Deque`](crate::Deque) operations.
///
/// The deque is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} (at {location})")]
pub struct Error {
    kind: ErrorKind,
    message: &'static str,
    location: &'static Location<'static>,
}

impl Error {
    /// Builds an error located at the caller.
    #[track_caller]
    #[inline]
    pub fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            location: Location::caller(),
        }
    }

    /// The error classification.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description of what was rejected.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// File and line of the call that failed.
    #[inline]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}
