// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Deque`](crate::Deque).
//!
//! - [`Iter`] walks the ring with two [`CircularIter`]s, one per end, so `nth`
//!   and `nth_back` are O(1) even across the wrap point.
//! - [`IterMut`] walks the two contiguous runs of the live window.
//! - [`IntoIter`] yields by value, popping from either end.
//!
//! All three support `DoubleEndedIterator`, `ExactSizeIterator`, and
//! `FusedIterator`; `.rev()` gives back-to-front traversal.

// Crate imports
use crate::{circular::CircularIter, deque::Deque};

// Core imports
use core::{fmt, iter::FusedIterator, mem::MaybeUninit, slice};

/// Borrowing iterator returned by [`Deque::iter`].
pub struct Iter<'a, T> {
    front: CircularIter<'a, MaybeUninit<T>>,
    back: CircularIter<'a, MaybeUninit<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// `window` is the whole slot array; `start` is the physical front.
    pub(crate) fn new(window: &'a [MaybeUninit<T>], start: usize, len: usize) -> Self {
        let front = CircularIter::with_start(window, start);
        Self {
            front,
            back: front + len as isize,
            remaining: len,
        }
    }

    #[inline]
    fn read(slot: &'a MaybeUninit<T>) -> &'a T {
        // SAFETY: both ends only ever point at live slots while `remaining > 0`,
        // and the deque stays borrowed for `'a`.
        unsafe { slot.assume_init_ref() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front.get()?;
        self.front.advance();
        self.remaining -= 1;
        Some(Self::read(slot))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.remaining {
            self.front = self.back;
            self.remaining = 0;
            return None;
        }
        self.front += n as isize;
        self.remaining -= n;
        self.next()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.retreat();
        self.remaining -= 1;
        self.back.get().map(Self::read)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.back = self.front;
            self.remaining = 0;
            return None;
        }
        self.back -= n as isize;
        self.remaining -= n;
        self.next_back()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator returned by [`Deque::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    head: slice::IterMut<'a, T>,
    tail: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: &'a mut [T], tail: &'a mut [T]) -> Self {
        Self {
            head: head.iter_mut(),
            tail: tail.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.head.next().or_else(|| self.tail.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.head.len() + self.tail.len();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        let head = self.head.len();
        if n < head {
            return self.head.nth(n);
        }
        self.head.nth(head);
        self.tail.nth(n - head)
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.next_back())
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `Deque::into_iter()`.
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize, P> {
    pub(crate) deque: Deque<T, N, P>,
}

impl<T: fmt::Debug, const N: usize, P> fmt::Debug for IntoIter<T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

impl<T, const N: usize, P> Iterator for IntoIter<T, N, P> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.deque.len();
        (rem, Some(rem))
    }
}

impl<T, const N: usize, P> DoubleEndedIterator for IntoIter<T, N, P> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}
impl<T, const N: usize, P> ExactSizeIterator for IntoIter<T, N, P> {}
impl<T, const N: usize, P> FusedIterator for IntoIter<T, N, P> {}

impl<'a, T, const N: usize, P> IntoIterator for &'a Deque<T, N, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const N: usize, P> IntoIterator for &'a mut Deque<T, N, P> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T, const N: usize, P> IntoIterator for Deque<T, N, P> {
    type Item = T;
    type IntoIter = IntoIter<T, N, P>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}
