//! Performance-focused tracing utilities
//!
//! [`PerformanceSpan`] times a region of code and emits a single debug event
//! when dropped. Spans are gated by a process-wide switch set from
//! [`crate::TracingConfig`] so that hot JNI entry points pay only an atomic
//! load when performance tracing is off.
//!
//! ```rust
//! use points_tracing::performance::PerformanceSpan;
//!
//! let span = PerformanceSpan::new("distance", Some(100));
//! // ... do work ...
//! drop(span); // Logs only if enabled and duration >= 100μs
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

// u64::MAX means "no global threshold"
static GLOBAL_THRESHOLD_US: AtomicU64 = AtomicU64::new(u64::MAX);

/// Turn performance spans on or off for the whole process.
///
/// `threshold_us` applies to spans created without a threshold of their own.
pub fn set_enabled(enabled: bool, threshold_us: Option<u64>) {
    ENABLED.store(enabled, Ordering::Relaxed);
    GLOBAL_THRESHOLD_US.store(threshold_us.unwrap_or(u64::MAX), Ordering::Relaxed);
}

/// Whether performance spans currently record anything.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

fn global_threshold() -> Option<u64> {
    match GLOBAL_THRESHOLD_US.load(Ordering::Relaxed) {
        u64::MAX => None,
        threshold => Some(threshold),
    }
}

/// RAII guard that measures span duration and conditionally logs it.
pub struct PerformanceSpan {
    inner: Option<ActiveSpan>,
}

struct ActiveSpan {
    threshold_us: Option<u64>,
    start_time: Instant,
    span: tracing::Span,
}

impl PerformanceSpan {
    /// Start timing `span_name`.
    ///
    /// * `threshold_us` - minimum duration to log; falls back to the global
    ///   threshold, and `None` for both logs every span.
    pub fn new(span_name: &'static str, threshold_us: Option<u64>) -> Self {
        if !is_enabled() {
            return Self { inner: None };
        }

        Self {
            inner: Some(ActiveSpan {
                threshold_us: threshold_us.or_else(global_threshold),
                start_time: Instant::now(),
                span: tracing::debug_span!("perf", name = span_name),
            }),
        }
    }

    pub fn is_recording(&self) -> bool {
        self.inner.is_some()
    }

    /// Microseconds since the span started, or 0 when not recording.
    pub fn elapsed_us(&self) -> u64 {
        self.inner
            .as_ref()
            .map(|active| active.start_time.elapsed().as_micros() as u64)
            .unwrap_or(0)
    }
}

impl Drop for PerformanceSpan {
    fn drop(&mut self) {
        let elapsed_us = self.elapsed_us();
        let Some(active) = self.inner.take() else {
            return;
        };

        if active.threshold_us.is_none_or(|t| elapsed_us >= t) {
            let _entered = active.span.enter();
            tracing::debug!(duration_us = elapsed_us, "performance_span_complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_disabled_by_default_switch() {
        set_enabled(false, None);
        let span = PerformanceSpan::new("off", None);
        assert!(!span.is_recording());
        assert_eq!(span.elapsed_us(), 0);
    }

    #[test]
    #[serial]
    fn test_enabled_span_records() {
        set_enabled(true, Some(10));
        let span = PerformanceSpan::new("on", None);
        assert!(span.is_recording());
        assert_eq!(span.inner.as_ref().and_then(|a| a.threshold_us), Some(10));
        drop(span);

        let span = PerformanceSpan::new("own_threshold", Some(3));
        assert_eq!(span.inner.as_ref().and_then(|a| a.threshold_us), Some(3));
        set_enabled(false, None);
    }

    #[test]
    #[serial]
    fn test_elapsed_grows_while_recording() {
        set_enabled(true, None);
        let span = PerformanceSpan::new("sleepy", None);
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(span.elapsed_us() >= 2_000);
        drop(span);
        set_enabled(false, None);
    }
}
