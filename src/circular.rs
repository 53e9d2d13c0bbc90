// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A wrap-around cursor over a fixed window.
//!
//! [`CircularIter`] walks a slice as if its last element were followed by its
//! first one. Stepping forward from the last element lands on the first and
//! stepping back from the first lands on the last, so the cursor never leaves
//! the window. Random-access offsets of any size and sign are resolved in a
//! single step.
//!
//! Because the cursor can never sit one past the end, it cannot act as an
//! end sentinel by itself; [`Deque::end`](crate::Deque::end) computes the
//! sentinel position directly instead.
//!
//! ```rust
//! use ring_deque::CircularIter;
//!
//! let window = [10, 20, 30];
//! let mut it = CircularIter::with_start(&window, 2);
//! assert_eq!(it.get(), Some(&30));
//! it.advance();
//! assert_eq!(it.get(), Some(&10));
//! it -= 4;
//! assert_eq!(it.get(), Some(&30));
//! assert_eq!(CircularIter::new(&window).take(5).copied().collect::<Vec<_>>(), [10, 20, 30, 10, 20]);
//! ```

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Cursor over `window` that wraps at both ends.
///
/// Equality, ordering, and [`distance`](CircularIter::distance) look at the
/// cursor position only, not at the window. Comparing cursors of different
/// windows is allowed but meaningless.
pub struct CircularIter<'a, T> {
    window: &'a [T],
    current: usize,
}

impl<'a, T> CircularIter<'a, T> {
    /// Creates a cursor positioned at the first element of `window`.
    #[inline]
    pub const fn new(window: &'a [T]) -> Self {
        Self { window, current: 0 }
    }

    /// Creates a cursor positioned at `start`, taken modulo the window length.
    #[inline]
    pub const fn with_start(window: &'a [T], start: usize) -> Self {
        let current = if window.is_empty() {
            0
        } else {
            start % window.len()
        };
        Self { window, current }
    }

    /// Returns the element under the cursor (`None` only for an empty window).
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.window.get(self.current)
    }

    /// Position of the cursor inside the window.
    #[inline]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Number of elements in the window.
    #[inline]
    pub const fn window_len(&self) -> usize {
        self.window.len()
    }

    /// The window this cursor walks.
    #[inline]
    pub const fn window(&self) -> &'a [T] {
        self.window
    }

    /// Steps forward by one, wrapping from the last element to the first.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let next = self.current + 1;
        if next >= self.window.len() {
            self.current = 0;
        } else {
            self.current = next;
        }
        self
    }

    /// Steps back by one, wrapping from the first element to the last.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        if self.current == 0 {
            self.current = self.window.len().saturating_sub(1);
        } else {
            self.current -= 1;
        }
        self
    }

    /// Moves the cursor by `n` positions (negative moves backwards).
    ///
    /// The result always equals `(position + n) mod window_len`.
    #[inline]
    pub fn offset(&mut self, n: isize) -> &mut Self {
        let len = self.window.len();
        if len == 0 {
            return self;
        }
        // `len <= isize::MAX` for any slice, and `rem_euclid` is never negative.
        let step = n.rem_euclid(len as isize) as usize;
        self.forward(step);
        self
    }

    /// Signed distance from `origin` to `self`, by position only.
    #[inline]
    pub fn distance(&self, origin: &Self) -> isize {
        self.current as isize - origin.current as isize
    }

    // `step < len`; only one wrap is ever needed.
    #[inline]
    fn forward(&mut self, step: usize) {
        let to_end = self.window.len() - self.current;
        self.current = if step < to_end {
            self.current + step
        } else {
            step - to_end
        };
    }

    #[inline]
    fn backward(&mut self, n: isize) {
        let len = self.window.len();
        if len == 0 {
            return;
        }
        let step = n.rem_euclid(len as isize) as usize;
        self.forward((len - step) % len);
    }
}

impl<T> Clone for CircularIter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for CircularIter<'_, T> {}

impl<T> fmt::Debug for CircularIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularIter")
            .field("position", &self.current)
            .field("window_len", &self.window.len())
            .finish()
    }
}

impl<T> PartialEq for CircularIter<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}
impl<T> Eq for CircularIter<'_, T> {}
impl<T> PartialOrd for CircularIter<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> Ord for CircularIter<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }
}
impl<T> Hash for CircularIter<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

impl<T> AddAssign<isize> for CircularIter<'_, T> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.offset(n);
    }
}
impl<T> SubAssign<isize> for CircularIter<'_, T> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.backward(n);
    }
}
impl<T> Add<isize> for CircularIter<'_, T> {
    type Output = Self;
    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}
impl<T> Sub<isize> for CircularIter<'_, T> {
    type Output = Self;
    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}
impl<'a, T> Sub for CircularIter<'a, T> {
    type Output = isize;
    #[inline]
    fn sub(self, origin: Self) -> isize {
        self.distance(&origin)
    }
}

/// Cycles through the window forever, starting at the cursor.
impl<'a, T> Iterator for CircularIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.window.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        let len = self.window.len();
        if len == 0 {
            return None;
        }
        self.forward(n % len);
        self.next()
    }
}
impl<T> FusedIterator for CircularIter<'_, T> {}
