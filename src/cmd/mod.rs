pub mod heapbench_cmd;

pub use heapbench_cmd::HeapBenchCMD;
