//! Wall-clock measurement for a single workload pass.

use std::time::Instant;

/// Run `work` once and return its value together with the elapsed wall-clock
/// milliseconds. One timestamp read on each side; nothing else sits inside
/// the measured region.
pub fn time_workload<T>(work: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = work();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
    tracing::debug!(target: "ubench::timing", elapsed_ms, "workload pass complete");
    (value, elapsed_ms)
}
