//! Logging facilities for Horizon Cascade.
//!
//! Horizon Cascade uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_cascade=debug")
//!     .init();
//! ```

/// Span names used throughout Horizon Cascade for tracing.
pub mod span_names {
    /// Per-frame update tick.
    pub const UPDATE: &str = "horizon_cascade::update";
    /// Draw-request assembly.
    pub const DRAW: &str = "horizon_cascade::draw";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_cascade_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_cascade_core::signal";
    /// Tick clock target.
    pub const CLOCK: &str = "horizon_cascade_core::clock";
    /// Menu lifecycle (show, hide, expand, dispose).
    pub const MENU: &str = "horizon_cascade::menu";
    /// Screen-boundary placement.
    pub const PLACEMENT: &str = "horizon_cascade::placement";
    /// Pointer, keyboard and gamepad routing.
    pub const INPUT: &str = "horizon_cascade::input";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_cascade::config";
    /// Skin lookups.
    pub const SKIN: &str = "horizon_cascade::skin";
}

/// A performance tracing span guard.
///
/// Creates a span when constructed and exits it when dropped.
///
/// # Example
///
/// ```ignore
/// use horizon_cascade_core::logging::PerfSpan;
///
/// fn draw_cascade() {
///     let _span = PerfSpan::new("draw_cascade");
///     // ... work is traced until _span is dropped
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_cascade::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::MENU, targets::PLACEMENT, targets::INPUT, targets::CONFIG] {
            assert!(target.starts_with("horizon_cascade::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
