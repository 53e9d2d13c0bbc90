// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Deque`](crate::Deque).
//!
//! `deque[i]` mirrors slice behavior: it panics when `i >= len()` and never
//! touches slots outside the live window. Range indexing is not offered since
//! the live window may wrap; use [`Deque::as_slices`](crate::Deque::as_slices).

// Crate imports
use crate::deque::Deque;

// Core imports
use core::ops::{Index, IndexMut};

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T, const N: usize, P> Index<usize> for Deque<T, N, P> {
    type Output = T;
    #[track_caller]
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Some(v) => v,
            None => index_out_of_bounds(i, self.len()),
        }
    }
}

impl<T, const N: usize, P> IndexMut<usize> for Deque<T, N, P> {
    #[track_caller]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let len = self.len();
        match self.get_mut(i) {
            Some(v) => v,
            None => index_out_of_bounds(i, len),
        }
    }
}
