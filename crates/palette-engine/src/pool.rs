//! Bounded row worker pool.
//!
//! A fixed number of scoped threads pull rows from a shared queue until it
//! is drained. Each row is handed out exactly once as a disjoint `&mut`
//! slice, so the output buffer itself needs no locking. The call returns
//! only after every worker has finished.

use std::num::NonZeroUsize;
use std::thread;

use parking_lot::Mutex;

/// Default worker count: the available hardware parallelism, or 1.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Number of workers actually spawned for `rows` units of work.
#[inline]
pub(crate) fn effective_workers(requested: usize, rows: usize) -> usize {
    requested.max(1).min(rows.max(1))
}

/// Run `f(row_index, row)` over every `width`-sized row of `buffer`.
///
/// `width` must be non-zero.
pub(crate) fn for_each_row_mut<T, F>(buffer: &mut [T], width: usize, workers: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    debug_assert!(width > 0, "row width must be non-zero");
    let rows = buffer.len() / width;
    let workers = effective_workers(workers, rows);
    tracing::debug!(rows, workers, "dispatching rows");

    if workers == 1 {
        for (y, row) in buffer.chunks_mut(width).enumerate() {
            f(y, row);
        }
        return;
    }

    let queue = Mutex::new(buffer.chunks_mut(width).enumerate());
    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| loop {
                let next = queue.lock().next();
                let Some((y, row)) = next else { break };
                f(y, row);
            });
        }
    });
}

/// Split `0..rows` into at most `workers` contiguous bands and run `f` on
/// each band concurrently. Results are returned in band order.
pub(crate) fn map_row_bands<R, F>(rows: usize, workers: usize, f: F) -> Vec<R>
where
    R: Send,
    F: Fn(std::ops::Range<usize>) -> R + Sync,
{
    let workers = effective_workers(workers, rows);
    let band = rows.div_ceil(workers).max(1);
    let bands: Vec<_> = (0..rows)
        .step_by(band)
        .map(|start| start..(start + band).min(rows))
        .collect();

    if bands.len() <= 1 {
        return bands.into_iter().map(f).collect();
    }

    let f = &f;
    thread::scope(|scope| {
        let handles: Vec<_> = bands
            .into_iter()
            .map(|range| scope.spawn(move || f(range)))
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
