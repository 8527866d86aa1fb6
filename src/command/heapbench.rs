use std::io::Write;

use anyhow::Result;

use crate::heap::{BinaryHeap, BuildPolicy, HeapOrder, MaxOrder, MinOrder};
use crate::runtime::Config;
use crate::timer::Timer;

/// Times heap construction for every selected variant and method.
///
/// Each run starts from a fresh heap. Variants run max before min, and within
/// a variant sift-down (append, then `heapify`) before sift-up (incremental
/// build). Only the restoring call is timed.
pub struct HeapBench;
impl HeapBench {
    /// Run the algorithm
    pub fn run<W: Write>(config: &Config, timer: &mut Timer, out: &mut W) -> Result<()> {
        log::debug!(
            "Running {:?} heap(s), {:?} method(s), {} elements",
            config.heap,
            config.method,
            config.elements
        );

        if config.heap.includes_max() {
            Self::run_variant::<MaxOrder, W>(config, timer, out)?;
        }
        if config.heap.includes_min() {
            Self::run_variant::<MinOrder, W>(config, timer, out)?;
        }

        out.flush()?;
        Ok(())
    }

    fn run_variant<O: HeapOrder, W: Write>(
        config: &Config,
        timer: &mut Timer,
        out: &mut W,
    ) -> Result<()> {
        let elements = config.elements;

        if config.method.includes_sift_down() {
            timer.reset();

            let mut heap = BinaryHeap::<O>::new();
            heap.build_heap(elements, BuildPolicy::AppendOnly);
            log::debug!("Appended {} elements to {} heap", heap.len(), O::NAME);

            if config.prints_contents() {
                write!(out, "\nBefore heapify:\n{}\n", heap)?;
            }

            timer.measure(|| heap.heapify());
            debug_assert!(heap.is_heap());

            if config.prints_contents() {
                write!(out, "\nAfter heapify:\n{}\n", heap)?;
            }
            writeln!(
                out,
                "\nTime to siftdown {} heap of {} elements: {:?}",
                O::NAME,
                elements,
                timer.time()
            )?;
            log::info!("Heapify of {} heap took {:?}", O::NAME, timer.time());
        }

        if config.method.includes_sift_up() {
            timer.reset();

            let mut heap = BinaryHeap::<O>::new();
            timer.measure(|| heap.build_heap(elements, BuildPolicy::Incremental));
            debug_assert!(heap.is_heap());

            writeln!(
                out,
                "\nTime to siftup {} heap of {} elements: {:?}",
                O::NAME,
                elements,
                timer.time()
            )?;
            writeln!(out)?;
            log::info!("Incremental build of {} heap took {:?}", O::NAME, timer.time());
        }

        Ok(())
    }
}
