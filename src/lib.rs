pub mod cmd;
pub mod command;
pub mod heap;
pub mod runtime;
pub mod timer;

pub use heap::{BinaryHeap, BuildPolicy, MaxHeap, MinHeap};
pub use timer::Timer;
