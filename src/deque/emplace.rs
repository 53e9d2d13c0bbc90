// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    deque::Deque,
    error::{Error, ErrorKind},
    policy::ErrorPolicy,
};

impl<T, const N: usize, P: ErrorPolicy> Deque<T, N, P> {
    /// Constructs a value with `f` directly in the slot after the back.
    ///
    /// `f` only runs once the capacity check has passed. If it panics the
    /// deque is left unchanged.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if the deque is full.
    #[track_caller]
    pub fn emplace_back_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return Self::fail(ErrorKind::Length, "emplace_back on a full deque");
        }
        // SAFETY: `len < N` was just checked.
        unsafe {
            self.ring.emplace_back_with(f);
            Ok(self.get_unchecked_mut(self.len() - 1))
        }
    }

    /// Constructs a value with `f` directly in the slot before the front.
    ///
    /// # Errors
    /// [`ErrorKind::Length`] if the deque is full.
    #[track_caller]
    pub fn emplace_front_with<F>(&mut self, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return Self::fail(ErrorKind::Length, "emplace_front on a full deque");
        }
        // SAFETY: `len < N` was just checked.
        unsafe {
            self.ring.emplace_front_with(f);
            Ok(self.get_unchecked_mut(0))
        }
    }

    /// Constructs a value with `f` so that it ends up at logical `index`.
    ///
    /// Follows the same positioning rules as [`insert`](Deque::insert). The
    /// slot is opened before `f` runs; if `f` panics the slot is closed again.
    ///
    /// # Errors
    /// - [`ErrorKind::OutOfRange`] if `index > len()`.
    /// - [`ErrorKind::Length`] if the deque is full.
    #[track_caller]
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        if index > self.len() {
            return Self::fail(ErrorKind::OutOfRange, "emplace position is past the back");
        }
        if self.is_full() {
            return Self::fail(ErrorKind::Length, "emplace on a full deque");
        }
        if index == 0 {
            return self.emplace_front_with(f);
        }
        if index == self.len() {
            return self.emplace_back_with(f);
        }
        self.ring.open_gap(index, 1).fill(f());
        // SAFETY: the gap at `index` was just filled.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Deque, ErrorKind};
    use alloc::string::String;

    #[test]
    fn test_emplace_at_both_ends() {
        let mut d: Deque<String, 3> = Deque::new();
        d.emplace_back_with(|| String::from("b")).unwrap();
        d.emplace_front_with(|| String::from("a")).unwrap().push('!');
        d.emplace_back_with(|| String::from("c")).unwrap();
        assert_eq!(d, [String::from("a!"), String::from("b"), String::from("c")]);
    }

    #[test]
    fn test_emplace_full_never_runs_closure() {
        let mut d: Deque<i32, 1> = Deque::new();
        d.push_back(1).unwrap();
        let mut ran = false;
        let err = d
            .emplace_back_with(|| {
                ran = true;
                2
            })
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Length);
        assert!(d.emplace_front_with(|| unreachable!()).is_err());
        assert!(d.emplace_with(0, || unreachable!()).is_err());
        assert!(!ran);
        assert_eq!(d, [1]);
    }

    #[test]
    fn test_emplace_in_middle() {
        let mut d: Deque<i32, 6> = Deque::new();
        for v in [1, 2, 4, 5] {
            d.push_back(v).unwrap();
        }
        *d.emplace_with(2, || 30).unwrap() /= 10;
        assert_eq!(d, [1, 2, 3, 4, 5]);
        assert_eq!(d.emplace_with(9, || 0).unwrap_err().kind(), ErrorKind::OutOfRange);
        d.emplace_with(5, || 6).unwrap();
        assert_eq!(d, [1, 2, 3, 4, 5, 6]);
        assert_eq!(d.emplace_with(0, || 0).unwrap_err().kind(), ErrorKind::Length);
    }

    #[test]
    fn test_emplace_panic_leaves_deque_unchanged() {
        let mut d: Deque<i32, 5> = Deque::new();
        for v in [1, 2, 3, 4] {
            d.push_back(v).unwrap();
        }
        let caught = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
            let _ = d.emplace_with(1, || panic!("constructor failed"));
        }));
        assert!(caught.is_err());
        assert_eq!(d, [1, 2, 3, 4]);

        let caught = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
            let _ = d.emplace_back_with(|| panic!("constructor failed"));
        }));
        assert!(caught.is_err());
        assert_eq!(d, [1, 2, 3, 4]);
    }
}
