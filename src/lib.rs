//! # nullsort
//!
//! Dialect-aware `NULLS FIRST` / `NULLS LAST` for generated `ORDER BY` clauses.
//!
//! ## Quick Start
//!
//! ```rust
//! use nullsort::prelude::*;
//!
//! let spec = SortSpec::from([
//!     SortTerm::asc("p.firstname"),
//!     SortTerm::desc("p.lastname").nulls_last(),
//!     SortTerm::desc("p.id").nulls_last(),
//! ]);
//!
//! let sql = spec.to_order_by(&Dialect::PostgreSQL.descriptor())?;
//! assert_eq!(sql, "p.firstname ASC, p.lastname DESC NULLS LAST, p.id DESC NULLS LAST");
//!
//! // MySQL has no NULLS clause; the placement is emulated with a CASE key
//! let sql = SortTerm::asc("p.email").nulls_first().to_order_by(&Dialect::MySQL.descriptor())?;
//! assert_eq!(sql, "CASE WHEN (p.email) IS NULL THEN 1 ELSE 0 END DESC, p.email ASC");
//! # Ok::<(), nullsort::error::SortError>(())
//! ```
//!
//! ## Dialect Support
//!
//! | Database   | Null ordering             | Descriptor      |
//! |------------|---------------------------|-----------------|
//! | SQLite     | native (3.30+)            | `NATIVE`        |
//! | PostgreSQL | native                    | `NATIVE`        |
//! | MySQL      | `CASE WHEN ... IS NULL`   | `CASE_EMULATED` |

#![cfg_attr(docsrs, feature(doc_cfg))]

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for formatting operations
pub use nullsort_core::error::Result;

/// Database dialect enum
pub use nullsort_types::Dialect;

/// Formatter entry point
pub use nullsort_core::{FormatExt, NullOrderingFormatter};

/// Error types
pub mod error {
    pub use nullsort_core::error::SortError;
    pub use nullsort_types::{DialectParseError, DirectionParseError, NullPlacementParseError};

    #[cfg(feature = "config")]
    pub use nullsort_core::config::ConfigError;
}

/// Value types: terms, specs and dialect descriptors.
pub use nullsort_types as types;

/// `"<alias>.<field>"` hint maps.
pub mod hints {
    pub use nullsort_core::hints::{NullsHints, SortKey};
}

/// nullsort.toml loading
#[cfg(feature = "config")]
pub mod config {
    pub use nullsort_core::config::{ConfigError, SortConfig};
}

/// Everything needed to build and format a sort specification
pub mod prelude {
    pub use nullsort_core::{FormatExt, NullOrderingFormatter, NullsHints, SortKey};
    pub use nullsort_types::prelude::*;

    #[cfg(feature = "config")]
    pub use nullsort_core::SortConfig;
}
