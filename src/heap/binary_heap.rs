use std::fmt;
use std::marker::PhantomData;

use itertools::Itertools;

use super::navigation::{is_leaf, left, parent, right};
use super::order::{HeapOrder, MaxOrder, MinOrder};
use super::Key;

pub type MaxHeap = BinaryHeap<MaxOrder>;
pub type MinHeap = BinaryHeap<MinOrder>;

/// How `build_heap` inserts the generated keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildPolicy {
    /// Append only. The heap property is not restored, call `heapify` afterwards
    AppendOnly,
    /// Append and sift up after every key, O(n log n) in total
    Incremental,
}

/// Binary heap over a contiguous vector of keys, ordered by `O`.
///
/// `push` and `pop` only touch the last slot and never restore the heap
/// property on their own. Reading `root` is only meaningful once `heapify`
/// has run, or when every `push` was followed by `sift_up`.
///
/// Indexing follows `Vec`: `root` and `get` panic out of range, `pop` on an
/// empty heap returns `None`. Nothing else is checked.
#[derive(Debug, Clone)]
pub struct BinaryHeap<O>
where
    O: HeapOrder,
{
    data: Vec<Key>,
    _order: PhantomData<O>,
}

impl<O> BinaryHeap<O>
where
    O: HeapOrder,
{
    super::delegate! {
        to self.data {
            #[inline] pub fn len(&self)         -> usize;
            #[inline] pub fn is_empty(&self)    -> bool;
            #[inline] pub fn iter(&self)        -> std::slice::Iter<'_, Key>;
            #[inline] pub fn as_slice(&self)    -> &[Key];
            #[inline] pub fn clear(&mut self);
        }
    }

    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _order: PhantomData,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Append a key to the bottom of the tree without restoring the heap property
    #[inline]
    pub fn push(&mut self, key: Key) {
        self.data.push(key);
    }

    /// Remove the last slot. This is not a priority extraction
    #[inline]
    pub fn pop(&mut self) -> Option<Key> {
        self.data.pop()
    }

    #[inline]
    pub fn root(&self) -> Key {
        self.data[0]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Key {
        self.data[index]
    }

    /// Index of the last leaf
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.data.len().checked_sub(1)
    }

    /// Fill the heap with `elements` keys from the worst-case generator of `O`
    pub fn build_heap(&mut self, elements: usize, policy: BuildPolicy) {
        match policy {
            BuildPolicy::AppendOnly => {
                for key in O::generate(elements) {
                    self.push(key);
                }
            }
            BuildPolicy::Incremental => {
                for key in O::generate(elements) {
                    self.push(key);
                    self.sift_up(self.data.len() - 1);
                }
            }
        }
    }

    /// Bottom-up restoration of the whole array in O(n). Sifts down every
    /// internal node, from the parent of the last leaf back to the root.
    pub fn heapify(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }

        for index in (0..=parent(len - 1)).rev() {
            self.sift_down(index);
        }
    }

    /// Walk from `index` to a leaf, swapping with the extremal child whenever
    /// the node is out of order. The walk always follows the selected child,
    /// whether or not a swap happened.
    pub fn sift_down(&mut self, index: usize) {
        let len = self.data.len();
        let mut node = index;

        while !is_leaf(node, len) {
            let child = self.extremal_child(node);
            if !O::is_better(&self.data[node], &self.data[child]) {
                self.data.swap(node, child);
            }
            node = child;
        }
    }

    /// Walk from `index` to the root, swapping with the parent whenever the
    /// node is out of order.
    pub fn sift_up(&mut self, index: usize) {
        if self.data.is_empty() {
            return;
        }

        let mut node = index;
        while node > 0 {
            let up = parent(node);
            if !O::is_better(&self.data[up], &self.data[node]) {
                self.data.swap(node, up);
            }
            node = up;
        }
    }

    /// Child to compare against in `sift_down`. On equal keys the left child wins
    #[inline]
    fn extremal_child(&self, index: usize) -> usize {
        let (l, r) = (left(index), right(index));
        if r < self.data.len() && !O::is_better(&self.data[l], &self.data[r]) {
            r
        } else {
            l
        }
    }

    /// Every parent is better than or equal to each of its children
    pub fn is_heap(&self) -> bool {
        let len = self.data.len();
        (0..len).all(|i| {
            [left(i), right(i)]
                .into_iter()
                .all(|c| c >= len || O::is_better(&self.data[i], &self.data[c]))
        })
    }

    /// Print the keys in index order, root first
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl<O> Default for BinaryHeap<O>
where
    O: HeapOrder,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<O> fmt::Display for BinaryHeap<O>
where
    O: HeapOrder,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} heap elements: {}",
            O::LABEL,
            self.data
                .iter()
                .format_with("", |key, f| f(&format_args!("{} ", key)))
        )
    }
}

impl<O> Extend<Key> for BinaryHeap<O>
where
    O: HeapOrder,
{
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.push(key);
        }
    }
}

/// Keys are appended as given; call `heapify` before reading the root
impl<O> FromIterator<Key> for BinaryHeap<O>
where
    O: HeapOrder,
{
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
