// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

impl<T, const N: usize, P> From<[T; N]> for Deque<T, N, P> {
    /// Builds a full deque holding the array elements in order.
    fn from(src: [T; N]) -> Self {
        let mut d = Self::new();
        for v in src {
            // SAFETY: exactly `N` values go into an empty deque of capacity `N`.
            unsafe { d.ring.push_back_unchecked(v) };
        }
        d
    }
}

impl<T: Clone, const N: usize, P: ErrorPolicy> TryFrom<&[T]> for Deque<T, N, P> {
    type Error = Error;

    /// Clones `src` into a new deque.
    ///
    /// Returns [`ErrorKind::Length`] if `src.len() > N`.
    #[track_caller]
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        if src.len() > N {
            return Self::fail(ErrorKind::Length, "slice is longer than the capacity");
        }
        let mut d = Self::new();
        for v in src {
            // SAFETY: `src.len() <= N`.
            unsafe { d.ring.push_back_unchecked(v.clone()) };
        }
        Ok(d)
    }
}

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Builds a deque from an iterator, failing if it yields more than `N` items.
    ///
    /// The source is consumed up to and including the first item that does not
    /// fit; that item and everything collected so far are dropped.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] on overflow.
    #[track_caller]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut d = Self::new();
        for item in iter {
            if d.is_full() {
                return Self::fail(ErrorKind::Length, "iterator yields more items than the capacity");
            }
            // SAFETY: not full, checked above.
            unsafe { d.ring.push_back_unchecked(item) };
        }
        Ok(d)
    }
}

impl<T, const N: usize, P> FromIterator<T> for Deque<T, N, P> {
    /// Collects at most the first `N` items and consumes nothing beyond them.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut d = Self::new();
        d.extend(iter);
        d
    }
}

impl<T, const N: usize, P> Extend<T> for Deque<T, N, P> {
    /// Appends items at the back until the deque is full; the rest of the
    /// source is left unconsumed.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let spare = self.spare_capacity();
        if spare == 0 {
            return;
        }
        for item in iter.into_iter().take(spare) {
            // SAFETY: at most `spare` items are pushed.
            unsafe { self.ring.push_back_unchecked(item) };
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize, P> Extend<&'a T> for Deque<T, N, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Deque, ErrorKind};

    #[test]
    fn test_from_array_is_full() {
        let d: Deque<i32, 3> = Deque::from([1, 2, 3]);
        assert!(d.is_full());
        assert_eq!(d, [1, 2, 3]);
    }

    #[test]
    fn test_try_from_slice() {
        let d: Deque<i32, 4> = Deque::try_from(&[1, 2][..]).unwrap();
        assert_eq!(d, [1, 2]);
        let err = Deque::<i32, 1>::try_from(&[1, 2][..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Length);
    }

    #[test]
    fn test_try_from_iter_overflow() {
        let d = Deque::<i32, 3>::try_from_iter(1..=3).unwrap();
        assert_eq!(d, [1, 2, 3]);

        let mut src = 1..=10;
        let err = Deque::<i32, 3>::try_from_iter(&mut src).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Length);
        // Stopped right after the item that did not fit.
        assert_eq!(src.next(), Some(5));
    }

    #[test]
    fn test_collect_truncates_without_overconsuming() {
        let mut src = 1..=10;
        let d: Deque<i32, 4> = src.by_ref().collect();
        assert_eq!(d, [1, 2, 3, 4]);
        assert_eq!(src.next(), Some(5));
    }

    #[test]
    fn test_extend_fills_remaining_capacity() {
        let mut d: Deque<i32, 5> = Deque::new();
        d.push_front(0).unwrap();
        let mut src = [1, 2, 3, 4, 5, 6].into_iter();
        d.extend(&mut src);
        assert_eq!(d, [0, 1, 2, 3, 4]);
        assert_eq!(src.next(), Some(5));

        d.extend([9]);
        assert_eq!(d.len(), 5);

        let mut e: Deque<i32, 5> = Deque::new();
        e.extend(&[7, 8]);
        assert_eq!(e, [7, 8]);
    }
}
