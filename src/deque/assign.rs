// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Replaces the contents with the items of `iter`.
    ///
    /// The reported [`ExactSizeIterator::len`] decides the capacity check;
    /// no more than that many items are consumed.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if the iterator reports more than `N` items; the
    /// deque is unchanged.
    #[track_caller]
    pub fn assign<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let count = iter.len();
        if count > N {
            return Self::fail(ErrorKind::Length, "assign source is longer than the capacity");
        }
        self.clear();
        for v in iter.take(count) {
            // SAFETY: at most `count <= N` values are pushed into a cleared ring.
            unsafe { self.ring.push_back_unchecked(v) };
        }
        Ok(())
    }

    /// Replaces the contents with `count` clones of `value`.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if `count > N`; the deque is unchanged.
    #[track_caller]
    pub fn assign_n(&mut self, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if count > N {
            return Self::fail(ErrorKind::Length, "assign count is larger than the capacity");
        }
        self.clear();
        self.resize(count, value)
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if `src.len() > N`; the deque is unchanged.
    #[track_caller]
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.assign(src.iter().cloned())
    }
}
