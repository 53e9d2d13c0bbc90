// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::deque::Deque;

impl<T, const N: usize, P> Deque<T, N, P> {
    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `len > 0` was just checked.
        Some(unsafe { self.ring.pop_back_unchecked() })
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `len > 0` was just checked.
        Some(unsafe { self.ring.pop_front_unchecked() })
    }

    /// Removes and returns the back element without checking for emptiness.
    ///
    /// # Safety
    /// The deque must not be empty.
    #[inline]
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.ring.pop_back_unchecked() }
    }

    /// Removes and returns the front element without checking for emptiness.
    ///
    /// # Safety
    /// The deque must not be empty.
    #[inline]
    pub unsafe fn pop_front_unchecked(&mut self) -> T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.ring.pop_front_unchecked() }
    }
}
