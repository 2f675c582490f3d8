//! Slot blocks and the capacity arithmetic used when a ring buffer grows.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::iter;

/// A fixed-size block of slots. Slots outside the live window hold `None`,
/// except after [`clear`](crate::CircularDeque::clear), which leaves stale
/// values in place.
pub(crate) type Slots<T> = Box<[Option<T>]>;

/// Allocates a block of `capacity` empty slots.
pub(crate) fn empty_slots<T>(capacity: usize) -> Slots<T> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// Moves the elements of `vec` into a block of exactly `vec.len()` slots.
pub(crate) fn slots_from_vec<T>(vec: Vec<T>) -> Slots<T> {
    vec.into_iter().map(Some).collect()
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[inline(never)]
#[cold]
#[track_caller]
pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index)
}

/// Returns the capacity a buffer holding `len` of `capacity` slots must grow
/// to before `additional` more elements can be inserted, or [`None`] if they
/// already fit.
///
/// Doubles the capacity when that is enough, otherwise sizes the buffer to
/// leave room for `additional` more elements after the insertion.
///
/// # Panics
/// Panics if the new capacity overflows a `usize`.
#[track_caller]
pub(crate) fn grown_capacity(len: usize, capacity: usize, additional: usize) -> Option<usize> {
    let required = match len.checked_add(additional) {
        Some(required) => required,
        None => capacity_overflow(),
    };

    if required <= capacity {
        return None;
    }

    match capacity.checked_mul(2) {
        Some(doubled) if required <= doubled => Some(doubled),
        Some(_) => match additional.checked_mul(2).and_then(|n| n.checked_add(len)) {
            Some(exact) => Some(exact),
            None => capacity_overflow(),
        },
        None => capacity_overflow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_growth_while_elements_fit() {
        assert_eq!(grown_capacity(0, 0, 0), None);
        assert_eq!(grown_capacity(3, 4, 1), None);
        assert_eq!(grown_capacity(2, 8, 6), None);
    }

    #[test]
    fn doubles_when_doubling_suffices() {
        assert_eq!(grown_capacity(4, 4, 1), Some(8));
        assert_eq!(grown_capacity(3, 4, 5), Some(8));
        assert_eq!(grown_capacity(1, 1, 1), Some(2));
    }

    #[test]
    fn sizes_for_large_batches() {
        assert_eq!(grown_capacity(0, 0, 1), Some(2));
        assert_eq!(grown_capacity(2, 2, 4), Some(10));
        assert_eq!(grown_capacity(2, 4, 7), Some(16));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn overflow_panics() {
        grown_capacity(usize::MAX, usize::MAX, 1);
    }

    #[test]
    fn empty_slots_are_cleared() {
        let slots = empty_slots::<u8>(5);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(Option::is_none));
    }

    #[test]
    fn slots_from_vec_keep_order() {
        let slots = slots_from_vec(alloc::vec![1, 2, 3]);
        assert_eq!(&slots[..], &[Some(1), Some(2), Some(3)][..]);
    }
}
