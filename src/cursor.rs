// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random-access positions inside a [`Deque`](crate::Deque).
//!
//! A [`Cursor`] is a [`CircularIter`] over all `N + 1` physical slots together
//! with a snapshot of where the live elements begin and how many there are.
//! Moving a cursor wraps around the slots the same way the deque stores its
//! elements, while comparisons and distances use the *logical* index, so
//! `end() - begin() == len()` no matter where the ring happens to start.
//!
//! The cursor borrows the deque, so no mutation can happen while it exists.

// Crate imports
use crate::circular::CircularIter;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    mem::MaybeUninit,
    ops::{Add, AddAssign, Index, Sub, SubAssign},
};

/// A position in a deque, from [`Deque::begin`](crate::Deque::begin) to
/// [`Deque::end`](crate::Deque::end) inclusive.
///
/// ```rust
/// use ring_deque::Deque;
///
/// let mut d: Deque<char, 3> = Deque::new();
/// d.push_back('b').unwrap();
/// d.push_back('c').unwrap();
/// d.push_front('a').unwrap();
///
/// let begin = d.begin();
/// let end = d.end();
/// assert_ne!(begin, end);
/// assert_eq!(end - begin, 3);
/// assert_eq!(begin[2], 'c');
/// assert_eq!((begin + 1).get(), Some(&'b'));
/// assert!((end - 3) == begin);
/// ```
pub struct Cursor<'a, T> {
    inner: CircularIter<'a, MaybeUninit<T>>,
    start: usize,
    len: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// `window` is the whole slot array; `position` and `start` are physical.
    #[inline]
    pub(crate) const fn new(
        window: &'a [MaybeUninit<T>],
        position: usize,
        start: usize,
        len: usize,
    ) -> Self {
        Self {
            inner: CircularIter::with_start(window, position),
            start,
            len,
        }
    }

    /// Logical index of this position: `0` at the front, `len` at the end.
    ///
    /// Positions in the spare slot report `len`; positions outside the live
    /// window report an index greater than `len`.
    #[inline]
    pub fn index(&self) -> usize {
        let slots = self.inner.window_len();
        (self.inner.position() + slots - self.start) % slots
    }

    /// Physical slot under the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.inner.position()
    }

    /// Returns the element under the cursor, or `None` when the cursor is not
    /// inside the live window (for example at [`end`](crate::Deque::end)).
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.index() >= self.len {
            return None;
        }
        let slot = self.inner.get()?;
        // SAFETY: the slot lies inside the live window, and the deque stays
        // borrowed for `'a`, so it cannot be modified behind the cursor.
        Some(unsafe { slot.assume_init_ref() })
    }

    /// Returns `true` if the cursor sits one past the back element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index() == self.len
    }

    /// Steps forward by one slot, wrapping at the end of the buffer.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.inner.advance();
        self
    }

    /// Steps back by one slot, wrapping at the start of the buffer.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        self.inner.retreat();
        self
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index())
            .field("position", &self.inner.position())
            .field("len", &self.len)
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index()
    }
}
impl<T> Eq for Cursor<'_, T> {}
impl<T> PartialOrd for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for Cursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.inner += n;
    }
}
impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.inner -= n;
    }
}
impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;
    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;
    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Logical distance between two positions of the same deque.
impl<T> Sub for Cursor<'_, T> {
    type Output = isize;
    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.index() as isize - origin.index() as isize
    }
}

/// `cursor[k]` is the element `k` positions away.
///
/// # Panics
/// Panics if that position is outside the live window.
impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;
    #[track_caller]
    fn index(&self, k: isize) -> &T {
        let target = *self + k;
        match target.get() {
            Some(v) => v,
            None => panic!(
                "cursor offset {k} lands on index {} but the deque holds {} elements",
                target.index(),
                self.len
            ),
        }
    }
}
