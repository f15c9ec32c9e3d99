//! Convenience macros for performance tracing

/// Create a [`crate::performance::PerformanceSpan`] guard.
///
/// ```rust
/// use points_tracing::perf_span;
///
/// {
///     let _span = perf_span!("allocate");
///     // ... operation code ...
/// } // Logs duration when performance tracing is enabled
/// ```
#[macro_export]
macro_rules! perf_span {
    ($name:expr) => {
        $crate::performance::PerformanceSpan::new($name, None)
    };
    ($name:expr, $threshold_us:expr) => {
        $crate::performance::PerformanceSpan::new($name, Some($threshold_us))
    };
}

/// Execute a block of code with timing, returning `(result, duration_us)`.
///
/// ```rust
/// use points_tracing::timed_block;
///
/// let (sum, duration_us) = timed_block!("sum", { (1..=100).sum::<i32>() });
/// assert_eq!(sum, 5050);
/// # let _ = duration_us;
/// ```
#[macro_export]
macro_rules! timed_block {
    ($name:expr, $block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        let duration_us = start.elapsed().as_micros() as u64;
        $crate::debug!(operation = $name, duration_us, "timed_block_complete");
        (result, duration_us)
    }};
}
