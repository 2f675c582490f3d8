//! A double-ended queue implemented with a growable ring buffer.
//!
//! This queue has amortized O(1) inserts and O(1) removals from both ends of
//! the sequence. It also has O(1) indexing like a vector.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::storage::{empty_slots, grown_capacity, index_out_of_bounds, slots_from_vec, Slots};
use crate::{DequeError, Result};

/// A double-ended queue implemented with a growable ring buffer.
///
/// The logical element at index `i` lives in slot `(front + i) % capacity`,
/// so the sequence may wrap around the end of the buffer. When an insertion
/// does not fit, the buffer is reallocated: to twice its capacity if that is
/// enough, otherwise to the new length plus the number of inserted elements.
/// Reallocation moves the front of the sequence back to slot 0. The buffer
/// never shrinks.
///
/// # Examples
/// ```
/// use ringdeque::CircularDeque;
///
/// let mut deque = CircularDeque::new();
/// deque.push_back(2);
/// deque.push_back(3);
/// deque.push_front(1);
/// assert_eq!(deque, [1, 2, 3]);
/// assert_eq!(deque.capacity(), 4);
/// ```
pub struct CircularDeque<T> {
    front: usize,
    len: usize,
    buf: Slots<T>,
}

impl<T> CircularDeque<T> {
    /// Creates an empty deque without allocating.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::CircularDeque::<u32>::new();
    /// assert_eq!(deque.len(), 0);
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty deque with exactly `capacity` slots.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::CircularDeque::<u32>::with_capacity(7);
    /// assert_eq!(deque.capacity(), 7);
    /// assert!(deque.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        CircularDeque {
            front: 0,
            len: 0,
            buf: empty_slots(capacity),
        }
    }

    /// Creates a deque holding clones of the elements of `slice`, in order.
    ///
    /// The capacity of the new deque equals `slice.len()`.
    ///
    /// # Examples
    /// ```
    /// let mut source = vec![1, 2, 3];
    /// let deque = ringdeque::CircularDeque::from_slice(&source);
    /// source[0] = 7;
    /// assert_eq!(deque, [1, 2, 3]);
    /// assert_eq!(deque.capacity(), 3);
    /// ```
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(slice.to_vec())
    }

    /// Returns the number of elements the deque can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements currently in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` exactly when the deque contains zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// # Examples
    /// ```
    /// let deque = ringdeque::CircularDeque::from([0, 1]);
    /// assert_eq!(deque.contains(&1), true);
    /// assert_eq!(deque.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    #[inline(always)]
    fn physical_index_unchecked(&self, index: usize) -> usize {
        (self.front + index) % self.capacity()
    }

    #[inline(always)]
    fn physical_index(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        Some(self.physical_index_unchecked(index))
    }

    /// Returns a reference to the element at the given index, or [`None`] if
    /// the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let index = self.physical_index(index)?;
        self.buf[index].as_ref()
    }

    /// Returns a mutable reference to the element at the given index, or
    /// [`None`] if the index is out of bounds.
    ///
    /// The element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = self.physical_index(index)?;
        self.buf[index].as_mut()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Unlike [`get`](CircularDeque::get), this accepts any integer type, so
    /// negative indices are rejected rather than being unrepresentable.
    ///
    /// # Errors
    /// Returns [`DequeError::IndexOutOfRange`] if `index` is negative, or not
    /// less than the length of the deque.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{CircularDeque, DequeError};
    ///
    /// let deque = CircularDeque::from([1, 2, 3]);
    /// assert_eq!(deque.at(0), Ok(&1));
    /// assert_eq!(deque.at(2), Ok(&3));
    /// assert_eq!(deque.at(-1), Err(DequeError::IndexOutOfRange));
    /// assert_eq!(deque.at(3), Err(DequeError::IndexOutOfRange));
    /// ```
    pub fn at<I: TryInto<usize>>(&self, index: I) -> Result<&T> {
        let index = index.try_into().map_err(|_| DequeError::IndexOutOfRange)?;
        self.get(index).ok_or(DequeError::IndexOutOfRange)
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    /// Returns [`DequeError::IndexOutOfRange`] if `index` is negative, or not
    /// less than the length of the deque.
    pub fn at_mut<I: TryInto<usize>>(&mut self, index: I) -> Result<&mut T> {
        let index = index.try_into().map_err(|_| DequeError::IndexOutOfRange)?;
        self.get_mut(index).ok_or(DequeError::IndexOutOfRange)
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.get(0).ok_or(DequeError::Empty)
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(DequeError::Empty)
    }

    /// Returns a reference to the back element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{CircularDeque, DequeError};
    ///
    /// let mut deque = CircularDeque::new();
    /// assert_eq!(deque.back(), Err(DequeError::Empty));
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.back(), Ok(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        let last = self.len.checked_sub(1).ok_or(DequeError::Empty)?;
        self.get(last).ok_or(DequeError::Empty)
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let last = self.len.checked_sub(1).ok_or(DequeError::Empty)?;
        self.get_mut(last).ok_or(DequeError::Empty)
    }

    /// Removes the first element and returns it.
    ///
    /// The vacated slot no longer owns the element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{CircularDeque, DequeError};
    ///
    /// let mut deque = CircularDeque::from([1, 2]);
    /// assert_eq!(deque.pop_front(), Ok(1));
    /// assert_eq!(deque.pop_front(), Ok(2));
    /// assert_eq!(deque.pop_front(), Err(DequeError::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }

        let front = self.front;
        let result = self.buf[front].take();
        self.front = (front + 1) % self.capacity();
        self.len -= 1;

        result.ok_or(DequeError::Empty)
    }

    /// Removes the last element and returns it.
    ///
    /// The vacated slot no longer owns the element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::{CircularDeque, DequeError};
    ///
    /// let mut deque = CircularDeque::from([1, 3]);
    /// assert_eq!(deque.pop_back(), Ok(3));
    /// assert_eq!(deque.pop_back(), Ok(1));
    /// assert_eq!(deque.pop_back(), Err(DequeError::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DequeError::Empty);
        }

        let idx = self.physical_index_unchecked(self.len - 1);
        let result = self.buf[idx].take();
        self.len -= 1;

        result.ok_or(DequeError::Empty)
    }

    /// Prepends an element to the front of the deque, reallocating if it is
    /// full.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a `usize`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque, [2, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.grow(1);

        let idx = (self.front + self.capacity() - 1) % self.capacity();
        self.buf[idx] = Some(value);

        self.front = idx;
        self.len += 1;
    }

    /// Appends an element to the back of the deque, reallocating if it is
    /// full.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a `usize`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::new();
    /// for x in 1..=5 {
    ///     deque.push_back(x);
    /// }
    /// assert_eq!(deque, [1, 2, 3, 4, 5]);
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.grow(1);

        let end = self.physical_index_unchecked(self.len);
        self.buf[end] = Some(value);

        self.len += 1;
    }

    /// Prepends clones of all elements of `other`, preserving their order.
    ///
    /// `other` is left unchanged. Runs in O(`other.len()`) time, plus the
    /// cost of at most one reallocation.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a `usize`.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::CircularDeque;
    ///
    /// let mut a = CircularDeque::from([3, 4]);
    /// let b = CircularDeque::from([1, 2]);
    /// a.concat_front(&b);
    /// assert_eq!(a, [1, 2, 3, 4]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    pub fn concat_front(&mut self, other: &CircularDeque<T>)
    where
        T: Clone,
    {
        let count = other.len();
        if count == 0 {
            return;
        }

        self.grow(count);

        let cap = self.capacity();
        self.front = (self.front + cap - count) % cap;
        for (i, value) in other.iter().enumerate() {
            let idx = self.physical_index_unchecked(i);
            self.buf[idx] = Some(value.clone());
        }

        self.len += count;
    }

    /// Appends clones of all elements of `other`, preserving their order.
    ///
    /// `other` is left unchanged. Runs in O(`other.len()`) time, plus the
    /// cost of at most one reallocation.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a `usize`.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::CircularDeque;
    ///
    /// let mut a = CircularDeque::from([1, 2]);
    /// let b = CircularDeque::from([3, 4]);
    /// a.concat_back(&b);
    /// assert_eq!(a, [1, 2, 3, 4]);
    /// assert_eq!(b, [3, 4]);
    /// ```
    pub fn concat_back(&mut self, other: &CircularDeque<T>)
    where
        T: Clone,
    {
        let count = other.len();
        if count == 0 {
            return;
        }

        self.grow(count);

        for (i, value) in other.iter().enumerate() {
            let idx = self.physical_index_unchecked(self.len + i);
            self.buf[idx] = Some(value.clone());
        }

        self.len += count;
    }

    /// Moves all elements of `other` to the back of `self`, leaving `other`
    /// empty.
    ///
    /// `other` keeps its capacity.
    ///
    /// # Examples
    /// ```
    /// use ringdeque::CircularDeque;
    ///
    /// let mut a = CircularDeque::from([String::from("a")]);
    /// let mut b = CircularDeque::from([String::from("b"), String::from("c")]);
    /// a.append(&mut b);
    /// assert_eq!(a, ["a", "b", "c"]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut CircularDeque<T>) {
        self.grow(other.len());
        while let Ok(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Ensures the deque can hold at least `capacity` elements in total.
    ///
    /// Does nothing if the capacity is already sufficient. Otherwise the
    /// buffer is reallocated to exactly `capacity` slots and the front of the
    /// sequence moves to slot 0.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::from([1, 2, 3]);
    /// deque.reserve(2);
    /// assert_eq!(deque.capacity(), 3);
    /// deque.reserve(10);
    /// assert_eq!(deque.capacity(), 10);
    /// assert_eq!(deque, [1, 2, 3]);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }

        let mut buf = empty_slots(capacity);
        for (i, slot) in buf.iter_mut().take(self.len).enumerate() {
            let idx = self.physical_index_unchecked(i);
            *slot = self.buf[idx].take();
        }

        self.buf = buf; // drops the previous buffer
        self.front = 0;
    }

    /// Reallocates according to the growth policy so that `additional` more
    /// elements fit.
    #[track_caller]
    fn grow(&mut self, additional: usize) {
        if let Some(capacity) = grown_capacity(self.len, self.capacity(), additional) {
            self.reserve(capacity);
        }
    }

    /// Empties the deque, keeping its capacity.
    ///
    /// This only resets the length and the front position. Removed values
    /// stay in their slots until they are overwritten by later insertions,
    /// or dropped along with the buffer on reallocation or when the deque is
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::from([1, 2, 3]);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.len = 0;
        self.front = 0;
    }

    /// Copies the elements into a new vector, front to back.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::from([2, 3]);
    /// deque.push_front(1);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn slot_slices(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.is_empty() {
            return (Default::default(), Default::default());
        }

        let (front, len) = (self.front, self.len);
        let until_end = self.capacity() - front;
        if len <= until_end {
            (&self.buf[front..front + len], Default::default())
        } else {
            let (wrapped, head) = self.buf.split_at(front);
            (head, &wrapped[..len - until_end])
        }
    }

    fn slot_slices_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        if self.is_empty() {
            return (Default::default(), Default::default());
        }

        let (front, len) = (self.front, self.len);
        let until_end = self.capacity() - front;
        if len <= until_end {
            (&mut self.buf[front..front + len], Default::default())
        } else {
            let (wrapped, head) = self.buf.split_at_mut(front);
            (head, &mut wrapped[..len - until_end])
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    /// let v: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(v, [&4, &5, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.slot_slices();
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    /// ```
    /// let mut deque = ringdeque::CircularDeque::from([5, 3]);
    /// deque.push_front(4);
    /// for num in deque.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// assert_eq!(deque, [2, 3, 1]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (head, tail) = self.slot_slices_mut();
        IterMut {
            head: head.iter_mut(),
            tail: tail.iter_mut(),
        }
    }
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularDeque<T> {
    /// Clones the elements into a buffer of the same capacity, with the
    /// front of the sequence at slot 0.
    fn clone(&self) -> Self {
        let mut buf = empty_slots(self.capacity());
        for (slot, value) in buf.iter_mut().zip(self.iter()) {
            *slot = Some(value.clone());
        }

        CircularDeque {
            front: 0,
            len: self.len,
            buf,
        }
    }
}

impl<T> Index<usize> for CircularDeque<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for CircularDeque<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => index_out_of_bounds(index, len),
        }
    }
}

impl<T: Debug> Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the elements front to back as `[a b c]`.
impl<T: Display> Display for CircularDeque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T: Hash> Hash for CircularDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T, U> PartialEq<CircularDeque<U>> for CircularDeque<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &CircularDeque<U>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T> CircularDeque<T> {
    fn eq_slice<U>(&self, other: &[U]) -> bool
    where
        T: PartialEq<U>,
    {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for CircularDeque<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.eq_slice(other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for CircularDeque<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.eq_slice(other)
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for CircularDeque<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.eq_slice(other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for CircularDeque<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.eq_slice(other)
    }
}

impl<T: PartialOrd> PartialOrd for CircularDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for CircularDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Extend<T> for CircularDeque<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        let iter = iter.into_iter();
        self.grow(iter.size_hint().0);
        iter.for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Clone> Extend<&'a T> for CircularDeque<T> {
    fn extend<It: IntoIterator<Item = &'a T>>(&mut self, iter: It) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> From<Vec<T>> for CircularDeque<T> {
    /// Converts a vector into a deque with capacity equal to its length.
    fn from(vec: Vec<T>) -> Self {
        CircularDeque {
            front: 0,
            len: vec.len(),
            buf: slots_from_vec(vec),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for CircularDeque<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl<T> From<CircularDeque<T>> for Vec<T> {
    fn from(deque: CircularDeque<T>) -> Self {
        deque.into_iter().collect()
    }
}

impl<T> FromIterator<T> for CircularDeque<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](CircularDeque::iter) method on
/// [`CircularDeque`]. See its documentation for more.
pub struct Iter<'a, T> {
    head: slice::Iter<'a, Option<T>>,
    tail: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.head.next() {
            Some(slot) => slot.as_ref(),
            None => self.tail.next()?.as_ref(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.tail.next_back() {
            Some(slot) => slot.as_ref(),
            None => self.head.next_back()?.as_ref(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter_mut`](CircularDeque::iter_mut)
/// method on [`CircularDeque`]. See its documentation for more.
pub struct IterMut<'a, T> {
    head: slice::IterMut<'a, Option<T>>,
    tail: slice::IterMut<'a, Option<T>>,
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let remaining = self.head.as_slice().iter().chain(self.tail.as_slice()).flatten();
        f.debug_tuple("IterMut")
            .field(&remaining.collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.head.next() {
            Some(slot) => slot.as_mut(),
            None => self.tail.next()?.as_mut(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.tail.next_back() {
            Some(slot) => slot.as_mut(),
            None => self.head.next_back()?.as_mut(),
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a deque.
///
/// This `struct` is created by the [`into_iter`](CircularDeque::into_iter)
/// method on [`CircularDeque`] (provided by the [`IntoIterator`] trait).
/// See its documentation for more.
pub struct IntoIter<T> {
    inner: CircularDeque<T>,
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
