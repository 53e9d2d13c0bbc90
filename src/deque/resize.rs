// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Resizes to `count` elements, growing at the back with clones of `value`
    /// or shrinking from the back.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if `count > N`; the deque is unchanged.
    #[track_caller]
    pub fn resize(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count > N {
            return Self::fail(ErrorKind::Length, "resize beyond the capacity");
        }
        if count <= self.len() {
            self.ring.truncate(count);
            return Ok(());
        }
        while self.len() + 1 < count {
            // SAFETY: `len < count <= N`.
            unsafe { self.ring.push_back_unchecked(value.clone()) };
        }
        // SAFETY: `len < count <= N`.
        unsafe { self.ring.push_back_unchecked(value) };
        Ok(())
    }

    /// Resizes to `count` elements, growing at the back with values produced
    /// by `f` or shrinking from the back.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if `count > N`; the deque is unchanged and `f` is
    /// never called.
    #[track_caller]
    pub fn resize_with<F>(&mut self, count: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if count > N {
            return Self::fail(ErrorKind::Length, "resize beyond the capacity");
        }
        self.ring.truncate(count);
        while self.len() < count {
            // SAFETY: `len < count <= N`.
            unsafe { self.ring.emplace_back_with(&mut f) };
        }
        Ok(())
    }
}
