pub mod heapbench;

pub use heapbench::HeapBench;
