// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Physical storage and index arithmetic behind [`Deque`](crate::Deque).
//!
//! The ring owns `N + 1` slots but never holds more than `N` live values. The
//! spare slot keeps the position one past the back distinct from the front
//! when the deque is full, so a begin/end pair can always tell "full" from
//! "empty" without a separate flag.

// Invariants:
// - `len <= N` always holds.
// - `start < SLOTS` always holds (`SLOTS == N + 1`).
// - Slots `physical(0) .. physical(len - 1)` hold initialized `T` values.
// - Every other slot is logically uninitialized and must never be read as `T`.

// Core imports
use core::{
    mem::{self, MaybeUninit},
    ops::Range,
    ptr, slice,
};

// `[MaybeUninit<T>; N]` followed by one more `MaybeUninit<T>` of the same
// alignment: under `repr(C)` this is laid out exactly like `[MaybeUninit<T>; N + 1]`.
#[repr(C)]
struct Slots<T, const N: usize> {
    head: [MaybeUninit<T>; N],
    spare: MaybeUninit<T>,
}

impl<T, const N: usize> Slots<T, N> {
    const fn uninit() -> Self {
        Self {
            head: [const { MaybeUninit::uninit() }; N],
            spare: MaybeUninit::uninit(),
        }
    }

    #[inline]
    fn as_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY: `Slots` is `repr(C)` with no padding between `head` and `spare`,
        // so it spans exactly `N + 1` consecutive `MaybeUninit<T>`. The pointer is
        // derived from the whole struct, not from `head`.
        unsafe { slice::from_raw_parts(ptr::from_ref(self).cast::<MaybeUninit<T>>(), N + 1) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: see `as_slice`; `&mut self` gives exclusive access.
        unsafe { slice::from_raw_parts_mut(ptr::from_mut(self).cast::<MaybeUninit<T>>(), N + 1) }
    }
}

/// Ring of `N + 1` slots with a logical window of `len` values starting at `start`.
pub(crate) struct RingBuffer<T, const N: usize> {
    slots: Slots<T, N>,
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Number of physical slots.
    pub(crate) const SLOTS: usize = N + 1;

    pub(crate) const fn new() -> Self {
        Self {
            slots: Slots::uninit(),
            start: 0,
            len: 0,
        }
    }

    /// All `N + 1` slots, live or not.
    #[inline]
    pub(crate) fn window(&self) -> &[MaybeUninit<T>] {
        self.slots.as_slice()
    }

    /// Physical slot of logical position `logical`.
    #[inline]
    pub(crate) fn physical(&self, logical: usize) -> usize {
        self.wrap_add(self.start, logical)
    }

    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        (index + addend % Self::SLOTS) % Self::SLOTS
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        (index + Self::SLOTS - subtrahend % Self::SLOTS) % Self::SLOTS
    }

    /// Constructs `value` in physical slot `slot` without reading what was there.
    #[inline]
    pub(crate) fn write(&mut self, slot: usize, value: T) {
        self.slots.as_mut_slice()[slot].write(value);
    }

    /// Moves the value out of physical slot `slot`.
    ///
    /// # Safety
    /// The slot must hold an initialized value, and the caller must stop treating
    /// it as live.
    #[inline]
    pub(crate) unsafe fn read(&self, slot: usize) -> T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.slots.as_slice()[slot].assume_init_read() }
    }

    /// Runs the destructor of the value in physical slot `slot`.
    ///
    /// # Safety
    /// The slot must hold an initialized value, and the caller must stop treating
    /// it as live.
    #[inline]
    pub(crate) unsafe fn drop_slot(&mut self, slot: usize) {
        if mem::needs_drop::<T>() {
            // SAFETY: guaranteed by the caller.
            unsafe { self.slots.as_mut_slice()[slot].assume_init_drop() }
        }
    }

    /// # Safety
    /// The slot must hold an initialized value.
    #[inline]
    pub(crate) unsafe fn slot(&self, slot: usize) -> &T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.slots.as_slice()[slot].assume_init_ref() }
    }

    /// # Safety
    /// The slot must hold an initialized value.
    #[inline]
    pub(crate) unsafe fn slot_mut(&mut self, slot: usize) -> &mut T {
        // SAFETY: guaranteed by the caller.
        unsafe { self.slots.as_mut_slice()[slot].assume_init_mut() }
    }

    /// Shared reference to logical position `index`, if live.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // SAFETY: `index < len`, so the slot lies inside the live window.
        Some(unsafe { self.slot(self.physical(index)) })
    }

    /// Exclusive reference to logical position `index`, if live.
    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.physical(index);
        // SAFETY: `index < len`, so the slot lies inside the live window.
        Some(unsafe { self.slot_mut(slot) })
    }

    /// # Safety
    /// `len < N`.
    #[inline]
    pub(crate) unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N, "push_back on a full ring");
        let slot = self.physical(self.len);
        self.write(slot, value);
        self.len += 1;
    }

    /// # Safety
    /// `len < N`.
    #[inline]
    pub(crate) unsafe fn push_front_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N, "push_front on a full ring");
        self.start = self.wrap_sub(self.start, 1);
        self.write(self.start, value);
        self.len += 1;
    }

    /// Runs `f` and constructs its result directly in the slot after the back.
    ///
    /// # Safety
    /// `len < N`.
    #[inline]
    pub(crate) unsafe fn emplace_back_with(&mut self, f: impl FnOnce() -> T) {
        debug_assert!(self.len < N, "emplace_back on a full ring");
        let slot = self.physical(self.len);
        self.slots.as_mut_slice()[slot].write(f());
        self.len += 1;
    }

    /// Runs `f` and constructs its result directly in the slot before the front.
    ///
    /// # Safety
    /// `len < N`.
    #[inline]
    pub(crate) unsafe fn emplace_front_with(&mut self, f: impl FnOnce() -> T) {
        debug_assert!(self.len < N, "emplace_front on a full ring");
        let slot = self.wrap_sub(self.start, 1);
        self.slots.as_mut_slice()[slot].write(f());
        self.start = slot;
        self.len += 1;
    }

    /// # Safety
    /// `len > 0`.
    #[inline]
    pub(crate) unsafe fn pop_back_unchecked(&mut self) -> T {
        debug_assert!(self.len > 0, "pop_back on an empty ring");
        self.len -= 1;
        let slot = self.physical(self.len);
        // SAFETY: the slot was the last live one and is no longer counted.
        unsafe { self.read(slot) }
    }

    /// # Safety
    /// `len > 0`.
    #[inline]
    pub(crate) unsafe fn pop_front_unchecked(&mut self) -> T {
        debug_assert!(self.len > 0, "pop_front on an empty ring");
        let slot = self.start;
        self.start = self.wrap_add(self.start, 1);
        self.len -= 1;
        // SAFETY: the slot was the first live one and is no longer counted.
        unsafe { self.read(slot) }
    }

    /// Moves `count` values from the run starting at physical `src` to the run
    /// starting at physical `dst`, wrapping at the end of the slots.
    ///
    /// Copies front to back when `dst` lies before `src` and back to front
    /// otherwise, so overlapping runs are handled. Source slots that are not
    /// overwritten become logically uninitialized.
    fn move_slots(&mut self, src: usize, dst: usize, count: usize) {
        if count == 0 || src == dst || mem::size_of::<T>() == 0 {
            return;
        }
        let dst_after_src = self.wrap_sub(dst, src) < count;
        let base = self.slots.as_mut_slice().as_mut_ptr();
        let step = |i: usize| {
            let from = (src + i) % Self::SLOTS;
            let to = (dst + i) % Self::SLOTS;
            // SAFETY: both indices are `< SLOTS`; a single slot never overlaps itself.
            unsafe { ptr::copy_nonoverlapping(base.add(from), base.add(to), 1) };
        };
        if dst_after_src {
            (0..count).rev().for_each(step);
        } else {
            (0..count).for_each(step);
        }
    }

    /// Opens `count` uninitialized slots at logical `index` by moving whichever
    /// side of `index` holds fewer values, and returns a guard that fills them.
    ///
    /// Requires `index <= len` and `len + count <= N`.
    pub(crate) fn open_gap(&mut self, index: usize, count: usize) -> Gap<'_, T, N> {
        debug_assert!(index <= self.len && self.len + count <= N);
        let back_len = self.len - index;
        if index < back_len {
            let old_start = self.start;
            self.start = self.wrap_sub(self.start, count);
            self.move_slots(old_start, self.start, index);
        } else {
            let src = self.physical(index);
            let dst = self.wrap_add(src, count);
            self.move_slots(src, dst, back_len);
        }
        self.len += count;
        Gap {
            ring: self,
            index,
            count,
            filled: 0,
        }
    }

    /// Removes the hole `[index, index + count)` whose values were already moved
    /// out or destroyed, moving whichever side of the hole holds fewer values.
    pub(crate) fn close_gap(&mut self, index: usize, count: usize) {
        debug_assert!(index + count <= self.len);
        let back_len = self.len - index - count;
        if index < back_len {
            let old_start = self.start;
            let new_start = self.wrap_add(self.start, count);
            self.move_slots(old_start, new_start, index);
            self.start = new_start;
        } else {
            let dst = self.physical(index);
            let src = self.wrap_add(dst, count);
            self.move_slots(src, dst, back_len);
        }
        self.len -= count;
    }

    /// Swaps the values at logical positions `i` and `j` (both `< len`).
    #[inline]
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.len && j < self.len);
        let (a, b) = (self.physical(i), self.physical(j));
        self.slots.as_mut_slice().swap(a, b);
    }

    /// Destroys the values at logical positions `len..`, back to front.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        if mem::needs_drop::<T>() {
            while self.len > len {
                // SAFETY: `len > 0` inside the loop.
                drop(unsafe { self.pop_back_unchecked() });
            }
        } else {
            self.len = len;
        }
    }

    /// Destroys every value and rewinds `start` to the first slot.
    pub(crate) fn clear(&mut self) {
        self.truncate(0);
        self.start = 0;
    }

    /// Physical ranges of the live window: the run up to the end of the slots,
    /// then the wrapped run from slot zero.
    #[inline]
    fn live_ranges(&self) -> (Range<usize>, Range<usize>) {
        let to_end = Self::SLOTS - self.start;
        if self.len <= to_end {
            (self.start..self.start + self.len, 0..0)
        } else {
            (self.start..Self::SLOTS, 0..self.len - to_end)
        }
    }

    pub(crate) fn as_slices(&self) -> (&[T], &[T]) {
        let (a, b) = self.live_ranges();
        let window = self.slots.as_slice();
        // SAFETY: both ranges lie inside the live window.
        unsafe { (assume_init(&window[a]), assume_init(&window[b])) }
    }

    pub(crate) fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (a, b) = self.live_ranges();
        let window = self.slots.as_mut_slice();
        // `b` always ends at or before `a` starts, so the split keeps them disjoint.
        let (low, high) = window.split_at_mut(a.start);
        let high = &mut high[..a.end - a.start];
        let low = &mut low[b];
        // SAFETY: both ranges lie inside the live window.
        unsafe { (assume_init_mut(high), assume_init_mut(low)) }
    }
}

impl<T, const N: usize> Drop for RingBuffer<T, N> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

/// # Safety
/// Every element of `s` must be initialized.
#[inline]
unsafe fn assume_init<T>(s: &[MaybeUninit<T>]) -> &[T] {
    // SAFETY: `MaybeUninit<T>` has the layout of `T`; initialization is guaranteed by the caller.
    unsafe { &*(ptr::from_ref(s) as *const [T]) }
}

/// # Safety
/// Every element of `s` must be initialized.
#[inline]
unsafe fn assume_init_mut<T>(s: &mut [MaybeUninit<T>]) -> &mut [T] {
    // SAFETY: as in `assume_init`.
    unsafe { &mut *(ptr::from_mut(s) as *mut [T]) }
}

/// Uninitialized run inside a [`RingBuffer`], filled front to back.
///
/// Whatever is still unfilled when the guard drops (a panicking producer, or a
/// source that ran dry early) is closed again, so the ring stays consistent.
pub(crate) struct Gap<'a, T, const N: usize> {
    ring: &'a mut RingBuffer<T, N>,
    index: usize,
    count: usize,
    filled: usize,
}

impl<T, const N: usize> Gap<'_, T, N> {
    /// Constructs `value` in the next unfilled slot. Extra values are dropped.
    #[inline]
    pub(crate) fn fill(&mut self, value: T) {
        if self.filled == self.count {
            return;
        }
        let slot = self.ring.physical(self.index + self.filled);
        self.ring.write(slot, value);
        self.filled += 1;
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.count - self.filled
    }
}

impl<T, const N: usize> Drop for Gap<'_, T, N> {
    fn drop(&mut self) {
        if self.filled < self.count {
            self.ring
                .close_gap(self.index + self.filled, self.count - self.filled);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::RingBuffer;
    use alloc::vec::Vec;

    fn contents<T: Copy, const N: usize>(r: &RingBuffer<T, N>) -> Vec<T> {
        let (a, b) = r.as_slices();
        a.iter().chain(b).copied().collect()
    }

    #[test]
    fn test_layout_spans_n_plus_one_slots() {
        let r: RingBuffer<u32, 4> = RingBuffer::new();
        assert_eq!(r.window().len(), 5);
        assert_eq!(RingBuffer::<u32, 4>::SLOTS, 5);
        assert_eq!(
            core::mem::size_of::<super::Slots<u32, 4>>(),
            5 * core::mem::size_of::<u32>()
        );
        let z: RingBuffer<u8, 0> = RingBuffer::new();
        assert_eq!(z.window().len(), 1);
    }

    #[test]
    fn test_wrap_arithmetic() {
        let r: RingBuffer<u8, 4> = RingBuffer::new();
        assert_eq!(r.wrap_add(4, 1), 0);
        assert_eq!(r.wrap_add(3, 7), 0);
        assert_eq!(r.wrap_sub(0, 1), 4);
        assert_eq!(r.wrap_sub(2, 5), 2);
        assert_eq!(r.wrap_sub(1, 3), 3);
    }

    #[test]
    fn test_push_pop_both_ends_wraps_start() {
        let mut r: RingBuffer<i32, 3> = RingBuffer::new();
        unsafe {
            r.push_front_unchecked(1);
            assert_eq!(r.start, 3);
            r.push_front_unchecked(0);
            r.push_back_unchecked(2);
        }
        assert_eq!(contents(&r), [0, 1, 2]);
        assert_eq!(unsafe { r.pop_front_unchecked() }, 0);
        assert_eq!(unsafe { r.pop_back_unchecked() }, 2);
        assert_eq!(contents(&r), [1]);
    }

    #[test]
    fn test_open_gap_moves_shorter_side() {
        let mut r: RingBuffer<i32, 8> = RingBuffer::new();
        for v in [0, 1, 2, 3, 4, 5] {
            unsafe { r.push_back_unchecked(v) };
        }

        // Near the back: the front must not move.
        {
            let mut gap = r.open_gap(5, 2);
            gap.fill(50);
            gap.fill(51);
        }
        assert_eq!(r.start, 0);
        assert_eq!(contents(&r), [0, 1, 2, 3, 4, 50, 51, 5]);

        // Near the front: the start moves backwards, wrapping.
        r.truncate(6);
        {
            let mut gap = r.open_gap(1, 1);
            gap.fill(10);
        }
        assert_eq!(r.start, 8);
        assert_eq!(contents(&r), [0, 10, 1, 2, 3, 4, 50]);
    }

    #[test]
    fn test_gap_guard_closes_unfilled_slots() {
        let mut r: RingBuffer<i32, 6> = RingBuffer::new();
        for v in [1, 2, 3, 4] {
            unsafe { r.push_back_unchecked(v) };
        }
        {
            let mut gap = r.open_gap(2, 2);
            gap.fill(9);
            assert_eq!(gap.remaining(), 1);
        }
        assert_eq!(contents(&r), [1, 2, 9, 3, 4]);
        assert_eq!(r.len, 5);
    }

    #[test]
    fn test_close_gap_both_sides() {
        let mut r: RingBuffer<i32, 6> = RingBuffer::new();
        for v in [0, 1, 2, 3, 4, 5] {
            unsafe { r.push_back_unchecked(v) };
        }
        // Remove index 1 (Copy type: no destructor to run).
        r.close_gap(1, 1);
        assert_eq!(contents(&r), [0, 2, 3, 4, 5]);
        assert_eq!(r.start, 1);

        // Remove indices 3..5.
        r.close_gap(3, 2);
        assert_eq!(contents(&r), [0, 2, 3]);
    }

    #[test]
    fn test_as_mut_slices_when_wrapped() {
        let mut r: RingBuffer<i32, 4> = RingBuffer::new();
        for v in [1, 2, 3] {
            unsafe { r.push_back_unchecked(v) };
        }
        for _ in 0..3 {
            let v = unsafe { r.pop_front_unchecked() };
            unsafe { r.push_back_unchecked(v * 10) };
        }
        // start = 3 of 5 slots: [10, 20] run to the end, [30] wrapped to slot 0.
        assert_eq!(r.start, 3);
        let (a, b) = r.as_mut_slices();
        assert_eq!(a, &[10, 20]);
        assert_eq!(b, &[30]);
        a[0] = 11;
        b[0] = 31;
        assert_eq!(contents(&r), [11, 20, 31]);
    }

    #[test]
    fn test_zst_ring() {
        let mut r: RingBuffer<(), 3> = RingBuffer::new();
        for _ in 0..3 {
            unsafe { r.push_back_unchecked(()) };
        }
        {
            let _gap = r.open_gap(0, 0);
        }
        r.close_gap(1, 1);
        assert_eq!(r.len, 2);
        r.clear();
        assert_eq!((r.start, r.len), (0, 0));
    }
}
