//! Index arithmetic for a complete binary tree laid out in a contiguous array.
//!
//! Index 0 is the root. Nodes are addressed by index only, never by reference,
//! so growing the backing storage cannot invalidate a position.

/// Parent of a non-root node: `floor((index - 1) / 2)`
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// A node is a leaf when it cannot have a left child. A complete tree never
/// has a right child without a left one, so the left slot is enough.
#[inline]
pub fn is_leaf(index: usize, len: usize) -> bool {
    //NOTE: same as left(i) > len-1, written so an empty heap does not underflow
    left(index) >= len
}
