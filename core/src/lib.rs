//! ORDER BY emission with dialect-aware null placement.
//!
//! [`NullOrderingFormatter`] turns a [`SortSpec`](nullsort_types::SortSpec) into an
//! `ORDER BY` term list. [`NullsHints`] maps `"<alias>.<field>"` keys to null
//! placements for callers that track preferences per field.

#[macro_use]
mod tracing;

#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod format;
pub mod hints;

pub use error::{Result, SortError};
pub use format::{FormatExt, NullOrderingFormatter};
pub use hints::{NullsHints, SortKey};

#[cfg(feature = "config")]
pub use config::{ConfigError, SortConfig};

pub use nullsort_types::{
    Dialect, DialectDescriptor, EmulationStrategy, NullPlacement, SortDirection, SortSpec,
    SortTerm,
};
