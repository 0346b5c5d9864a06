//! Row-band work partitioning for the propagation phases.
//!
//! Both phases parallelize the same way: the grid's rows are split into
//! contiguous bands, each worker writes into its own full-size partial
//! buffer, and the partials are summed after the scoped threads join.
//! Several partials may carry contributions for the same cell — a
//! band's last row reaches into the next band's rows through its
//! neighbour offsets — but each contribution lands in exactly one
//! private buffer, so the additive reduction resolves the overlap and
//! results are independent of scheduling.

use std::ops::Range;

/// Hard cap on workers, matching the band partitioner's usefulness.
const MAX_WORKERS: usize = 64;

/// Resolve a requested worker count.
///
/// `None` asks the OS for available parallelism; explicit values are
/// clamped into `[1, 64]`.
pub fn resolved_workers(requested: Option<usize>) -> usize {
    match requested {
        Some(n) => n.clamp(1, MAX_WORKERS),
        None => std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(MAX_WORKERS),
    }
}

/// Split `rows` rows into at most `workers` contiguous non-empty bands.
pub(crate) fn row_bands(rows: u32, workers: usize) -> Vec<Range<i32>> {
    let rows = rows as usize;
    let workers = workers.clamp(1, MAX_WORKERS).min(rows.max(1));
    let base = rows / workers;
    let extra = rows % workers;
    let mut bands = Vec::with_capacity(workers);
    let mut start = 0usize;
    for i in 0..workers {
        let len = base + usize::from(i < extra);
        if len == 0 {
            continue;
        }
        bands.push(start as i32..(start + len) as i32);
        start += len;
    }
    bands
}

/// Run `work` once per row band on scoped threads, collecting results
/// in band order. A single band runs inline on the calling thread.
pub(crate) fn map_bands<T, F>(rows: u32, workers: usize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, Range<i32>) -> T + Sync,
{
    let bands = row_bands(rows, workers);
    if bands.len() <= 1 {
        return bands
            .into_iter()
            .enumerate()
            .map(|(i, band)| work(i, band))
            .collect();
    }
    std::thread::scope(|scope| {
        let handles: Vec<_> = bands
            .into_iter()
            .enumerate()
            .map(|(i, band)| {
                let work = &work;
                scope.spawn(move || work(i, band))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

/// Element-wise `dst += src`.
pub(crate) fn sum_into(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}
