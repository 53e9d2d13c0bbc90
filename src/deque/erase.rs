// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, const N: usize, P> Deque<T, N, P> {
    /// Removes and returns the element at `index`, or `None` if `index >= len()`.
    ///
    /// Whichever side of `index` holds fewer elements moves inward by one slot.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        let slot = self.ring.physical(index);
        // SAFETY: `index < len`, and the hole is closed right below.
        let value = unsafe { self.ring.read(slot) };
        self.ring.close_gap(index, 1);
        Some(value)
    }
}

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Destroys the element at `index`.
    ///
    /// Returns the index of the element that now occupies the erased position,
    /// which equals `len()` when the back element was erased.
    ///
    /// # Errors
    /// [`ErrorKind::OutOfRange`] if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> Result<usize, Error> {
        match self.remove(index) {
            Some(value) => {
                drop(value);
                Ok(index)
            }
            None => Self::fail(ErrorKind::OutOfRange, "erase position is not an element"),
        }
    }

    /// Destroys the elements in `range`.
    ///
    /// Returns the index of the element that now occupies the start of the
    /// range (`len()` when the range reached the back).
    ///
    /// # Errors
    /// [`ErrorKind::OutOfRange`] if the range is inverted or ends past `len()`.
    #[track_caller]
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize, Error>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&i) => Some(i),
            Bound::Excluded(&i) => i.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i.checked_add(1),
            Bound::Excluded(&i) => Some(i),
            Bound::Unbounded => Some(len),
        };
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= len => (start, end),
            _ => return Self::fail(ErrorKind::OutOfRange, "erase range is outside the deque"),
        };

        let count = end - start;
        if count == 0 {
            return Ok(start);
        }

        // Hide the range and everything after it while destructors run, so a
        // panicking destructor leaks the tail instead of dropping it twice.
        self.ring.len = start;
        for i in start..end {
            let slot = self.ring.physical(i);
            // SAFETY: `i` was live, and is no longer counted.
            unsafe { self.ring.drop_slot(slot) };
        }
        self.ring.len = len;
        self.ring.close_gap(start, count);
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Deque, ErrorKind};
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[derive(Debug)]
    struct Counted(Rc<Cell<usize>>);
    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn wrapped() -> Deque<i32, 7> {
        // Eight slots, start at slot 6.
        let mut d: Deque<i32, 7> = Deque::new();
        for _ in 0..6 {
            d.push_back(0).unwrap();
            d.pop_front();
        }
        for v in 0..7 {
            d.push_back(v).unwrap();
        }
        d
    }

    #[test]
    fn test_remove_front_middle_back() {
        let mut d = wrapped();
        assert_eq!(d.remove(0), Some(0));
        assert_eq!(d.remove(5), Some(6));
        assert_eq!(d.remove(2), Some(3));
        assert_eq!(d, [1, 2, 4, 5]);
        assert_eq!(d.remove(4), None);
    }

    #[test]
    fn test_erase_returns_following_position() {
        let mut d = wrapped();
        assert_eq!(d.erase(1), Ok(1));
        assert_eq!(d[1], 2);
        assert_eq!(d.erase(5), Ok(5));
        assert_eq!(d.len(), 5);
        assert_eq!(d, [0, 2, 3, 4, 5]);
        assert_eq!(d.erase(5).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_erase_range_forms() {
        let mut d = wrapped();
        assert_eq!(d.erase_range(1..3), Ok(1));
        assert_eq!(d, [0, 3, 4, 5, 6]);
        assert_eq!(d.erase_range(3..), Ok(3));
        assert_eq!(d, [0, 3, 4]);
        assert_eq!(d.erase_range(..=0), Ok(0));
        assert_eq!(d, [3, 4]);
        assert_eq!(d.erase_range(1..1), Ok(1));
        assert_eq!(d.erase_range(..), Ok(0));
        assert!(d.is_empty());
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_erase_range_rejects_bad_bounds() {
        let mut d = wrapped();
        assert_eq!(d.erase_range(2..1).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(d.erase_range(0..8).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(d.erase_range(..=usize::MAX).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(d.len(), 7);
    }

    #[test]
    fn test_erase_destroys_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut d: Deque<Counted, 6> = Deque::new();
        for _ in 0..6 {
            d.push_back(Counted(drops.clone())).unwrap();
        }
        d.erase(2).unwrap();
        assert_eq!(drops.get(), 1);
        d.erase_range(1..3).unwrap();
        assert_eq!(drops.get(), 3);
        let taken = d.remove(0);
        assert_eq!(drops.get(), 3);
        drop(taken);
        assert_eq!(drops.get(), 4);
        drop(d);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn test_insert_erase_inverse_at_every_position() {
        for index in 0..7 {
            let mut d = wrapped();
            d.pop_back();
            let before = d.clone();
            d.insert(index, 42).unwrap();
            d.erase(index).unwrap();
            assert_eq!(d, before, "index {index}");
        }
    }
}
