//! Logging facilities for Horizon Board.
//!
//! Horizon Board uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_board=debug")
//!     .init();
//! ```
//!
//! Measure and layout passes are wrapped in [`PerfSpan`]s so their cost shows
//! up in any span-aware subscriber.

/// Log targets, one per subsystem. Use them in `RUST_LOG` style directives.
pub mod targets {
    /// Lifecycle and observer registration.
    pub const CORE: &str = "horizon_board_core";
    /// Timer system target.
    pub const TIMER: &str = "horizon_board::timer";
    /// Measurement and placement passes.
    pub const LAYOUT: &str = "horizon_board::layout";
    /// Pointer, keyboard and focus handling.
    pub const INPUT: &str = "horizon_board::input";
    /// Data source notifications and item cache maintenance.
    pub const DATA: &str = "horizon_board::data";
}

/// Keeps an `info` span on `horizon_board::perf` entered until dropped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a span tagged with `operation = name`.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_board::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level log on the core target.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "horizon_board_core", $($arg)*)
    };
}

/// Debug-level log on the core target.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "horizon_board_core", $($arg)*)
    };
}

/// Warn-level log on the core target.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "horizon_board_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("layout");
    }

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("measure");
            board_debug!(items = 3, "inside span");
        });
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::TIMER, targets::LAYOUT, targets::INPUT, targets::DATA] {
            assert!(target.starts_with("horizon_board::"));
        }
    }
}
