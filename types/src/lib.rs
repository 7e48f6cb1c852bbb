//! Shared value types for nullsort
//!
//! This crate provides the plain data types the `ORDER BY` formatter works on:
//!
//! - [`SortTerm`] / [`SortSpec`] - one sort key and an ordered list of them
//! - [`SortDirection`] and [`NullPlacement`] - per-term ordering policy
//! - [`DialectDescriptor`] - what a SQL engine supports for null ordering
//! - [`Dialect`] - named presets (SQLite, PostgreSQL, MySQL)
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::{
        borrow::Cow,
        string::{String, ToString},
        vec,
        vec::Vec,
    };

    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        borrow::Cow,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

mod dialect;
pub mod serde_helpers;
mod sort;

pub use dialect::{Dialect, DialectDescriptor, DialectParseError, EmulationStrategy};
pub use sort::{
    DirectionParseError, NullPlacement, NullPlacementParseError, SortDirection, SortSpec, SortTerm,
};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        Dialect, DialectDescriptor, EmulationStrategy, NullPlacement, SortDirection, SortSpec,
        SortTerm,
    };
}
