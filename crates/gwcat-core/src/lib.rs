//! # gwcat-core — Foundational Types for Community Catalogs
//!
//! This crate is the bedrock of the gwcat toolchain. It defines the typed
//! record tree for gravitational-wave community catalog submissions, the
//! controlled vocabularies those records are checked against, and the
//! posterior-sample aggregation path. The `gwcat-schema` crate builds the
//! parser, serializer, and validator on top of it; this crate depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Strict tree ownership.** `Catalog` owns `Event`s, events own their
//!    `SearchResult`s and `ParameterSet`s, which own their `ParameterValue`s
//!    and `Link`s. No shared references, no back-pointers.
//!
//! 2. **Immutable value records.** Records are constructed once and never
//!    mutated; validation produces a separate report and touches nothing.
//!
//! 3. **Closed vocabularies, open data.** Parameter names outside the
//!    vocabulary are accepted (the validator warns); units that violate a
//!    fixed-unit constraint are rejected, because downstream consumers rely
//!    on fixed units.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public record types derive `Debug`, `Clone`, `PartialEq`, and
//!   implement `Serialize`.

pub mod catalog;
pub mod error;
pub mod samples;
pub mod vocabulary;

// Re-export primary types for ergonomic imports.
pub use catalog::{Catalog, Event, Link, ParameterSet, ParameterValue, SearchResult};
pub use error::{SampleError, SchemaError};
pub use samples::SampleTable;
pub use vocabulary::{NameStatus, UnitStatus};

/// The schema version this library writes and checks against.
///
/// Documents carrying a different `schema_version` are still accepted; the
/// validator reports the drift as a warning.
pub const SCHEMA_VERSION: &str = env!("CARGO_PKG_VERSION");
