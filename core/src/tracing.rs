//! Tracing utilities for ORDER BY emission.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the emitted fragment and term count.
///
/// ```ignore
/// nullsort_trace_order_by!(&sql, spec.len(), dialect.emulates_nulls());
/// ```
#[macro_export]
macro_rules! nullsort_trace_order_by {
    ($sql:expr, $terms:expr, $emulated:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, terms = $terms, emulated = $emulated, "nullsort.order_by");
    };
}

/// Emit a warn-level tracing event for a rejected sort term.
///
/// ```ignore
/// nullsort_trace_invalid!(index, "empty expression");
/// ```
#[macro_export]
macro_rules! nullsort_trace_invalid {
    ($index:expr, $reason:literal) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(term = $index, reason = $reason, "nullsort.invalid_term");
    };
}
