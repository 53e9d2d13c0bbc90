// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Deque` type and its inherent API.
//!
//! `Deque<T, N>` is a fixed-capacity double-ended queue stored inline in a ring
//! of `N + 1` slots. Operations that can fail report through the deque's
//! [`ErrorPolicy`] and leave the deque unchanged.
//!
//! No heap allocations are performed.

mod assign;
mod emplace;
mod erase;
mod from;
mod insert;
mod pop;
mod push;
mod resize;
mod swap;

// Crate imports
use crate::{
    cursor::Cursor,
    error::{Error, ErrorKind},
    iter::{Iter, IterMut},
    policy::{ErrorPolicy, Propagate},
    ring::RingBuffer,
};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// A fixed-capacity double-ended queue backed by an inline ring buffer.
///
/// `Deque<T, N>` holds up to `N` values. Both ends accept pushes and pops in
/// O(1); inserting or erasing in the middle moves whichever side of the
/// position holds fewer elements, so the cost is `O(min(index, len - index))`.
///
/// # Layout
///
/// - The ring holds `N + 1` slots of `MaybeUninit<T>`; one slot is always
///   free, which keeps [`begin`](Deque::begin) and [`end`](Deque::end) distinct
///   for every non-empty deque.
/// - Logical index `i` lives in physical slot `(start + i) % (N + 1)`.
/// - Only the `len` slots of the logical window hold values; elements outside
///   it are never read or dropped.
///
/// # Errors
///
/// Capacity and bounds violations return an [`Error`] and change nothing.
/// Before returning, the deque calls `P::report`, where `P` is the
/// [`ErrorPolicy`] (default [`Propagate`]). The `unsafe` `*_unchecked`
/// methods skip the checks entirely.
///
/// # Examples
///
/// ```rust
/// use ring_deque::Deque;
///
/// let mut d: Deque<i32, 4> = Deque::new();
/// for v in 1..=4 {
///     d.push_back(v).unwrap();
/// }
/// assert!(d.is_full());
/// assert_eq!(d.pop_front(), Some(1));
/// d.push_back(5).unwrap();
/// assert_eq!(d, [2, 3, 4, 5]);
///
/// assert!(d.insert(1, 99).is_err());
/// assert_eq!(d, [2, 3, 4, 5]);
/// d.pop_front();
/// d.insert(1, 99).unwrap();
/// assert_eq!(d, [3, 99, 4, 5]);
/// ```
pub struct Deque<T, const N: usize, P = Propagate> {
    pub(crate) ring: RingBuffer<T, N>,
    policy: PhantomData<fn() -> P>,
}

impl<T, const N: usize, P> Deque<T, N, P> {
    /// The fixed capacity of this deque.
    pub const CAPACITY: usize = N;

    /// Constructs an empty deque.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ring: RingBuffer::new(),
            policy: PhantomData,
        }
    }

    /// Returns the capacity of this deque (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.ring.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.ring.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.ring.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.ring.len
    }

    /// Returns `Some(&T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.ring.get(index)
    }

    /// Returns `Some(&mut T)` if `index < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.ring.get_mut(index)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "get_unchecked out of range");
        // SAFETY: guaranteed by the caller.
        unsafe { self.ring.slot(self.ring.physical(index)) }
    }

    /// Returns the element at `index` mutably without a bounds check.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "get_unchecked_mut out of range");
        let slot = self.ring.physical(index);
        // SAFETY: guaranteed by the caller.
        unsafe { self.ring.slot_mut(slot) }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len().wrapping_sub(1))
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len().wrapping_sub(1))
    }

    /// Front-to-back iterator over shared references.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.ring.window(), self.ring.start, self.ring.len)
    }

    /// Front-to-back iterator over exclusive references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (a, b) = self.ring.as_mut_slices();
        IterMut::new(a, b)
    }

    /// The live elements as two slices: the run up to the end of the buffer,
    /// then the part that wrapped around to its start.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        self.ring.as_slices()
    }

    /// Mutable counterpart of [`as_slices`](Deque::as_slices).
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        self.ring.as_mut_slices()
    }

    /// Random-access cursor at the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.ring.window(), self.ring.start, self.ring.start, self.ring.len)
    }

    /// Random-access cursor one past the back element.
    ///
    /// The position is computed from `start + len`, never by stepping, and is
    /// distinct from [`begin`](Deque::begin) whenever the deque is non-empty.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        let end = self.ring.physical(self.ring.len);
        Cursor::new(self.ring.window(), end, self.ring.start, self.ring.len)
    }

    /// Returns `true` if the deque contains `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Drops every element past `len`; a no-op when `len >= self.len()`.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.ring.truncate(len);
    }

    /// Drops every element and rewinds the ring to its first slot.
    ///
    /// Types without drop glue skip the per-element loop.
    #[inline]
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Reports a failure through `P` and returns it.
    #[cold]
    #[track_caller]
    pub(crate) fn fail<R>(kind: ErrorKind, message: &'static str) -> Result<R, Error> {
        let error = Error::new(kind, message);
        P::report(&error);
        Err(error)
    }

    /// Returns the element at `index`, or [`ErrorKind::OutOfRange`].
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        match self.ring.get(index) {
            Some(v) => Ok(v),
            None => Self::fail(ErrorKind::OutOfRange, "index is past the back of the deque"),
        }
    }

    /// Returns the element at `index` mutably, or [`ErrorKind::OutOfRange`].
    #[inline]
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index >= self.len() {
            return Self::fail(ErrorKind::OutOfRange, "index is past the back of the deque");
        }
        // SAFETY: `index < len` was just checked.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }
}

impl<T, const N: usize, P> Default for Deque<T, N, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, P> Clone for Deque<T, N, P> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for v in self {
            // SAFETY: `out` has the same capacity and `self.len() <= N`.
            unsafe { out.ring.push_back_unchecked(v.clone()) };
        }
        out
    }
}

impl<T: fmt::Debug, const N: usize, P> fmt::Debug for Deque<T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("len", &self.len())
            .field("elements", &self.iter())
            .finish()
    }
}

impl<T: PartialEq, const N: usize, P> PartialEq for Deque<T, N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq, const N: usize, P> Eq for Deque<T, N, P> {}

impl<T: PartialEq, const N: usize, P, const M: usize> PartialEq<[T; M]> for Deque<T, N, P> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == M && self.iter().eq(other.iter())
    }
}
impl<T: PartialEq, const N: usize, P> PartialEq<[T]> for Deque<T, N, P> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd, const N: usize, P> PartialOrd for Deque<T, N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Ord, const N: usize, P> Ord for Deque<T, N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const N: usize, P> Hash for Deque<T, N, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}
