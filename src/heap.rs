use std::fmt;
use std::iter::FromIterator;

use log::trace;

use crate::error::HeapError;
use crate::order::{Compare, MaxOrder, MinOrder};

/// Starting capacity of a heap built with `new` or `default`
pub const DEFAULT_CAPACITY: usize = 10;

pub type MinHeap<T> = Heap<T, MinOrder>;
pub type MaxHeap<T> = Heap<T, MaxOrder>;

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// The root has no parent, whatever `(0 - 1) / 2` would give
fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Binary heap ordered by `C`. The element that `C` ranks first is always at the root.
#[derive(Clone)]
pub struct Heap<T, C> {
    /// live elements in heap order; `data.len()` is the heap size
    data: Vec<T>,
    /// logical capacity, doubled when a full heap receives a push
    capacity: usize,
    order: C,
}

impl<T, C: Compare<T> + Default> Heap<T, C> {
    pub fn new() -> Self {
        Self::with_capacity_and_order(DEFAULT_CAPACITY, C::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, C::default())
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    pub fn with_order(order: C) -> Self {
        Self::with_capacity_and_order(DEFAULT_CAPACITY, order)
    }

    /// A capacity of 0 is raised to 1 so that doubling always grows the buffer
    pub fn with_capacity_and_order(capacity: usize, order: C) -> Self {
        let capacity = capacity.max(1);
        Heap {
            data: Vec::with_capacity(capacity),
            capacity,
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Live elements in buffer order. Only the root position is meaningful to callers.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn has_left_child(&self, index: usize) -> bool {
        left_child(index) < self.len()
    }

    fn has_right_child(&self, index: usize) -> bool {
        right_child(index) < self.len()
    }

    fn ensure_capacity(&mut self) {
        let len = self.len();
        if len == self.capacity {
            let grown = self.capacity * 2;
            trace!("growing heap buffer from {} to {}", self.capacity, grown);
            self.data.reserve_exact(grown - len);
            self.capacity = grown;
        }
    }

    fn sift_up(&mut self, index: usize) {
        /* Move the element at `index` toward the root while it outranks its parent */
        if let Some(parent_index) = parent(index) {
            if self
                .order
                .precedes(&self.data[index], &self.data[parent_index])
            {
                self.data.swap(index, parent_index);
                self.sift_up(parent_index)
            }
        }
    }

    fn sift_down(&mut self, index: usize) {
        /* Fix the heap property when a new element is placed at `index` */
        if !self.has_left_child(index) {
            return;
        }
        let mut child_index = left_child(index);
        // right only wins when strictly better
        if self.has_right_child(index)
            && self
                .order
                .precedes(&self.data[right_child(index)], &self.data[child_index])
        {
            child_index = right_child(index);
        }
        if self
            .order
            .precedes(&self.data[child_index], &self.data[index])
        {
            self.data.swap(index, child_index);
            self.sift_down(child_index)
        }
    }

    pub fn push(&mut self, value: T) {
        self.ensure_capacity();
        self.data.push(value);
        self.sift_up(self.len() - 1);
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        // the last element takes the root's slot and the size drops before sifting
        let result = self.data.swap_remove(0);
        self.sift_down(0);
        Some(result)
    }

    pub fn try_peek(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pop elements one at a time, first-ranked first
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }
}

impl<T, C: Compare<T> + Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Heap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T, C: Compare<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Heap::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> From<Vec<T>> for Heap<T, C> {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}

pub struct DrainSorted<'a, T, C: Compare<T>> {
    heap: &'a mut Heap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}
