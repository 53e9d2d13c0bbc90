// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

// Core imports
use core::mem;

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Swaps the elements at logical positions `i` and `j`.
    ///
    /// # Errors
    /// [`ErrorKind::OutOfRange`] if either index is `>= len()`.
    #[inline]
    #[track_caller]
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), Error> {
        if i >= self.len() || j >= self.len() {
            return Self::fail(ErrorKind::OutOfRange, "swap index is not an element");
        }
        self.ring.swap(i, j);
        Ok(())
    }
}

impl<T, const N: usize, P> Deque<T, N, P> {
    /// Exchanges the contents of two deques.
    ///
    /// Types without drop glue swap the whole buffers in one move. Other types
    /// rotate element by element: `min(len, other.len())` paired
    /// front-to-back transfers, then the longer deque hands its remaining
    /// elements over. Both deques keep their logical order.
    pub fn swap_with(&mut self, other: &mut Self) {
        if !mem::needs_drop::<T>() {
            mem::swap(&mut self.ring, &mut other.ring);
            return;
        }

        let common = self.len().min(other.len());
        for _ in 0..common {
            // SAFETY: both deques hold at least `common` elements before the
            // loop, and each pop is followed by one push on the same deque.
            unsafe {
                let a = self.ring.pop_front_unchecked();
                let b = other.ring.pop_front_unchecked();
                self.ring.push_back_unchecked(b);
                other.ring.push_back_unchecked(a);
            }
        }

        let (longer, shorter) = if self.len() > other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let extra = longer.len() - shorter.len();
        for _ in 0..extra {
            // SAFETY: the first `extra` elements of `longer` are the ones that
            // belong to `shorter`, which holds `common` elements and will end
            // with `common + extra <= N`.
            unsafe {
                let v = longer.ring.pop_front_unchecked();
                shorter.ring.push_back_unchecked(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Deque, ErrorKind};
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    fn strings(values: &[&str]) -> Deque<String, 5> {
        let mut d = Deque::new();
        for v in values {
            d.push_back(v.to_string()).unwrap();
        }
        d
    }

    fn plain(d: &Deque<String, 5>) -> Vec<&str> {
        d.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_swap_elements() {
        let mut d: Deque<i32, 4> = Deque::new();
        for v in [1, 2, 3] {
            d.push_front(v).unwrap();
        }
        d.swap(0, 2).unwrap();
        assert_eq!(d, [1, 2, 3]);
        d.swap(1, 1).unwrap();
        assert_eq!(d.swap(0, 3).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(d, [1, 2, 3]);
    }

    #[test]
    fn test_swap_with_trivial_type() {
        let mut a: Deque<u8, 4> = Deque::new();
        let mut b: Deque<u8, 4> = Deque::new();
        a.push_back(1).unwrap();
        for v in [7, 8, 9] {
            b.push_front(v).unwrap();
        }
        a.swap_with(&mut b);
        assert_eq!(a, [9, 8, 7]);
        assert_eq!(b, [1]);
    }

    #[test]
    fn test_swap_with_non_trivial_longer_self() {
        let mut a = strings(&["a0", "a1", "a2", "a3"]);
        let mut b = strings(&["b0"]);
        a.swap_with(&mut b);
        assert_eq!(plain(&a), ["b0"]);
        assert_eq!(plain(&b), ["a0", "a1", "a2", "a3"]);
    }

    #[test]
    fn test_swap_with_non_trivial_longer_other() {
        let mut a = strings(&["a0", "a1"]);
        let mut b = strings(&["b0", "b1", "b2", "b3", "b4"]);
        a.swap_with(&mut b);
        assert_eq!(plain(&a), ["b0", "b1", "b2", "b3", "b4"]);
        assert_eq!(plain(&b), ["a0", "a1"]);

        let mut empty = strings(&[]);
        a.swap_with(&mut empty);
        assert!(a.is_empty());
        assert_eq!(empty.len(), 5);
    }
}
