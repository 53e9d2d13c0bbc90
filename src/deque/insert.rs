// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Checks an insertion of `count` elements at `index`.
    #[inline]
    #[track_caller]
    fn check_insert(&self, index: usize, count: usize) -> Result<(), Error> {
        if index > self.len() {
            return Self::fail(ErrorKind::OutOfRange, "insert position is past the back");
        }
        if count > self.spare_capacity() {
            return Self::fail(ErrorKind::Length, "insert would exceed the capacity");
        }
        Ok(())
    }

    /// Inserts `value` so that it ends up at logical `index`, and returns `index`.
    ///
    /// Inserting at `0` is a push to the front and inserting at `len()` a push
    /// to the back. Otherwise whichever side of `index` holds fewer elements
    /// moves by one slot, so the cost is `O(min(index, len - index))`.
    ///
    /// # Errors
    /// - [`ErrorKind::OutOfRange`] if `index > len()`.
    /// - [`ErrorKind::Length`] if the deque is full.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        self.check_insert(index, 1)?;
        if index == 0 {
            // SAFETY: not full, checked above.
            unsafe { self.ring.push_front_unchecked(value) };
        } else if index == self.len() {
            // SAFETY: not full, checked above.
            unsafe { self.ring.push_back_unchecked(value) };
        } else {
            self.ring.open_gap(index, 1).fill(value);
        }
        Ok(index)
    }

    /// Inserts `count` clones of `value` starting at `index` and returns `index`.
    ///
    /// Capacity is checked for the whole run before anything moves.
    ///
    /// # Errors
    /// - [`ErrorKind::OutOfRange`] if `index > len()`.
    /// - [`ErrorKind::Length`] if `count > spare_capacity()`.
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<usize, Error>
    where
        T: Clone,
    {
        self.check_insert(index, count)?;
        if count == 0 {
            return Ok(index);
        }
        let mut gap = self.ring.open_gap(index, count);
        for _ in 1..count {
            gap.fill(value.clone());
        }
        gap.fill(value);
        Ok(index)
    }

    /// Inserts clones of `src` starting at `index` and returns `index`.
    ///
    /// # Errors
    /// - [`ErrorKind::OutOfRange`] if `index > len()`.
    /// - [`ErrorKind::Length`] if `src.len() > spare_capacity()`.
    #[track_caller]
    pub fn insert_from_slice(&mut self, index: usize, src: &[T]) -> Result<usize, Error>
    where
        T: Clone,
    {
        self.check_insert(index, src.len())?;
        let mut gap = self.ring.open_gap(index, src.len());
        for v in src {
            gap.fill(v.clone());
        }
        Ok(index)
    }

    /// Inserts the items of `iter` starting at `index` and returns `index`.
    ///
    /// The reported [`ExactSizeIterator::len`] decides the capacity check.
    /// Items beyond that length are not consumed; if the iterator ends early,
    /// only the items it produced are inserted.
    ///
    /// # Errors
    /// - [`ErrorKind::OutOfRange`] if `index > len()`.
    /// - [`ErrorKind::Length`] if the iterator reports more items than
    ///   `spare_capacity()`.
    #[track_caller]
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = iter.into_iter();
        let count = iter.len();
        self.check_insert(index, count)?;
        let mut gap = self.ring.open_gap(index, count);
        while gap.remaining() > 0 {
            match iter.next() {
                Some(v) => gap.fill(v),
                None => break,
            }
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Deque, ErrorKind};
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::Cell;

    fn from(values: &[i32]) -> Deque<i32, 8> {
        let mut d = Deque::new();
        for &v in values {
            d.push_back(v).unwrap();
        }
        d
    }

    #[test]
    fn test_insert_front_back_and_middle() {
        let mut d = from(&[1, 2, 3]);
        assert_eq!(d.insert(0, 0), Ok(0));
        assert_eq!(d.insert(4, 4), Ok(4));
        assert_eq!(d.insert(2, 15), Ok(2));
        assert_eq!(d, [0, 1, 15, 2, 3, 4]);
    }

    #[test]
    fn test_insert_then_erase_restores_sequence() {
        for index in 0..=5 {
            let mut d = from(&[1, 2, 3, 4, 5]);
            let at = d.insert(index, 99).unwrap();
            assert_eq!(d[at], 99);
            assert_eq!(d.erase(at), Ok(at));
            assert_eq!(d, [1, 2, 3, 4, 5], "index {index}");
        }
    }

    #[test]
    fn test_insert_errors_are_noops() {
        let mut d = from(&[1, 2]);
        assert_eq!(d.insert(3, 9).unwrap_err().kind(), ErrorKind::OutOfRange);

        let mut full: Deque<i32, 2> = Deque::new();
        full.push_back(1).unwrap();
        full.push_back(2).unwrap();
        assert_eq!(full.insert(1, 9).unwrap_err().kind(), ErrorKind::Length);
        // Position is validated before capacity.
        assert_eq!(full.insert(5, 9).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(full, [1, 2]);
        assert_eq!(d, [1, 2]);
    }

    #[test]
    fn test_insert_n_and_from_slice() {
        let mut d = from(&[1, 5]);
        assert_eq!(d.insert_n(1, 3, 0), Ok(1));
        assert_eq!(d, [1, 0, 0, 0, 5]);
        assert_eq!(d.insert_from_slice(5, &[6, 7]), Ok(5));
        assert_eq!(d, [1, 0, 0, 0, 5, 6, 7]);
        assert_eq!(d.insert_from_slice(0, &[8, 9]).unwrap_err().kind(), ErrorKind::Length);
        assert_eq!(d.insert_n(0, 0, 42), Ok(0));
        assert_eq!(d.len(), 7);
    }

    #[test]
    fn test_insert_iter_near_front_wraps() {
        let mut d = from(&[10, 20, 30, 40, 50]);
        d.insert_iter(1, [11, 12, 13]).unwrap();
        assert_eq!(d, [10, 11, 12, 13, 20, 30, 40, 50]);
        // The front side moved, so the ring start wrapped backwards.
        assert_eq!(d.ring.start, 6);
        assert!(d.is_full());
    }

    #[test]
    fn test_insert_iter_short_source_closes_gap() {
        struct Liar<I>(I);
        impl<I: Iterator> Iterator for Liar<I> {
            type Item = I::Item;
            fn next(&mut self) -> Option<I::Item> {
                self.0.next()
            }
        }
        impl<I: Iterator> ExactSizeIterator for Liar<I> {
            fn len(&self) -> usize {
                4
            }
        }

        let mut d = from(&[1, 2, 3]);
        d.insert_iter(1, Liar([7, 8].into_iter())).unwrap();
        assert_eq!(d, [1, 7, 8, 2, 3]);
    }

    #[test]
    fn test_insert_n_clone_panic_keeps_deque_consistent() {
        #[derive(Debug)]
        struct Bomb(Rc<Cell<usize>>);
        impl Clone for Bomb {
            fn clone(&self) -> Self {
                let n = self.0.get();
                if n == 1 {
                    panic!("boom");
                }
                self.0.set(n + 1);
                Bomb(self.0.clone())
            }
        }

        let clones = Rc::new(Cell::new(0));
        let mut d: Deque<Bomb, 6> = Deque::new();
        for _ in 0..3 {
            d.push_back(Bomb(Rc::new(Cell::new(0)))).ok();
        }
        let value = Bomb(clones.clone());
        let caught = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
            let _ = d.insert_n(1, 3, value);
        }));
        assert!(caught.is_err());
        // One clone made it in before the panic; the rest of the gap closed.
        assert_eq!(d.len(), 4);
        let owners: Vec<_> = d.iter().map(|b| Rc::ptr_eq(&b.0, &clones)).collect();
        assert_eq!(owners, [false, true, false, false]);
    }
}
