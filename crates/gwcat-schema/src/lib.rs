//! # gwcat-schema — Catalog Parsing, Serialization, and Validation
//!
//! Implements the document layer of the gwcat toolchain on top of the
//! typed records in `gwcat-core`:
//!
//! - [`parse`] — tolerant deserialization of catalog JSON into the record
//!   tree. Unknown keys are ignored for forward compatibility; missing or
//!   mis-typed required keys abort with a structural
//!   [`SchemaError`](gwcat_core::SchemaError).
//! - [`validate`] — one-pass semantic validation producing an ordered
//!   [`ValidationReport`] of error and warning [`Finding`]s, each with a
//!   JSON Pointer into the document. Warnings never fail a catalog;
//!   a single error does.
//! - [`serialize`] — deterministic rendering back to canonical JSON, with
//!   defaults omitted, such that `parse(serialize(c)) == c`.
//!
//! ## Crate Policy
//!
//! - Depends only on `gwcat-core` internally.
//! - Validation is side-effect free and never mutates its input.
//! - Findings are collected for the whole document before any failure is
//!   reported; there is no fail-fast path.

pub mod parse;
pub mod serialize;
pub mod validate;

pub use parse::{parse_slice, parse_str, parse_value};
pub use serialize::{to_string_pretty, to_value, write_file};
pub use validate::{validate, validate_value, Finding, Severity, ValidationReport};
