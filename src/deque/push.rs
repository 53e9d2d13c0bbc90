// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Appends `value` after the back element.
    ///
    /// Returns [`ErrorKind::Length`] (and drops `value`) if the deque is full.
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.is_full() {
            return Self::fail(ErrorKind::Length, "push_back on a full deque");
        }
        // SAFETY: `len < N` was just checked.
        unsafe { self.ring.push_back_unchecked(value) };
        Ok(())
    }

    /// Prepends `value` before the front element.
    ///
    /// Returns [`ErrorKind::Length`] (and drops `value`) if the deque is full.
    #[inline]
    #[track_caller]
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        if self.is_full() {
            return Self::fail(ErrorKind::Length, "push_front on a full deque");
        }
        // SAFETY: `len < N` was just checked.
        unsafe { self.ring.push_front_unchecked(value) };
        Ok(())
    }
}

impl<T, const N: usize, P> Deque<T, N, P> {
    /// Appends `value` without checking capacity.
    ///
    /// # Safety
    /// The deque must not be full.
    #[inline]
    pub unsafe fn push_back_unchecked(&mut self, value: T) {
        // SAFETY: guaranteed by the caller.
        unsafe { self.ring.push_back_unchecked(value) }
    }

    /// Prepends `value` without checking capacity.
    ///
    /// # Safety
    /// The deque must not be full.
    #[inline]
    pub unsafe fn push_front_unchecked(&mut self, value: T) {
        // SAFETY: guaranteed by the caller.
        unsafe { self.ring.push_front_unchecked(value) }
    }
}
