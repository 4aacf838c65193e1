//! Logging facilities for rowkit.
//!
//! rowkit uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("rowkit=debug")
//!     .init();
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so filters such as
//! `rowkit::drag=trace` isolate a single concern.

/// Span names used throughout rowkit for tracing.
pub mod span_names {
    /// Full re-render of a list.
    pub const RENDER: &str = "rowkit::render";
    /// Signal emission span.
    pub const SIGNAL: &str = "rowkit::signal";
}

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "rowkit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rowkit_core::signal";
    /// Collection mutations and notifications.
    pub const COLLECTION: &str = "rowkit::collection";
    /// Row synchronization (add/remove/reset handling, re-render).
    pub const SYNC: &str = "rowkit::sync";
    /// Selection changes.
    pub const SELECTION: &str = "rowkit::selection";
    /// Keyboard and pointer routing.
    pub const INPUT: &str = "rowkit::input";
    /// Drag and drop.
    pub const DRAG: &str = "rowkit::drag";
    /// Performance spans.
    pub const PERF: &str = "rowkit::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Use it to time an operation:
///
/// ```
/// use rowkit_core::PerfSpan;
///
/// let _span = PerfSpan::new("rebuild");
/// // ... work ...
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "rowkit::perf", "perf", operation = name);
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
        for target in [
            targets::COLLECTION,
            targets::SYNC,
            targets::SELECTION,
            targets::INPUT,
            targets::DRAG,
            targets::PERF,
        ] {
            assert!(target.starts_with("rowkit::"), "{target}");
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
