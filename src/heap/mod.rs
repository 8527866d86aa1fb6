mod binary_heap;
pub mod navigation;
mod order;

pub(crate) use delegate::delegate;

/// Keys stored in a heap
pub type Key = i64;

pub use binary_heap::BinaryHeap;
pub use binary_heap::BuildPolicy;
pub use binary_heap::MaxHeap;
pub use binary_heap::MinHeap;

pub use order::MaxOrder;
pub use order::MinOrder;

pub mod prelude {
    pub use super::order::HeapOrder;
}
pub use prelude::*;
