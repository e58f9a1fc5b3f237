//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the catalog toolchain. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `SchemaError` is structural and fatal: a required key is missing or has
//!   the wrong primitive type, or the document is not JSON at all. It aborts
//!   before semantic validation runs.
//! - Semantic problems (vocabulary, units, uniqueness, bounds) are never
//!   errors in this sense; they are collected as findings by the validator
//!   so that one pass surfaces every problem in the document.
//! - `SampleError` covers the posterior-sample aggregation path, which never
//!   touches JSON.

use thiserror::Error;

/// Structural failure while parsing or serializing a catalog document.
///
/// Every variant that refers to a location carries a JSON Pointer path so
/// the offending key can be found in the source document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The input could not be parsed as JSON, or the object graph could not
    /// be serialized (e.g., a non-finite float).
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required key is absent.
    #[error("{path}: missing required key `{key}`")]
    MissingKey {
        /// JSON Pointer to the record that lacks the key.
        path: String,
        /// The missing key name.
        key: &'static str,
    },

    /// A value has the wrong primitive type.
    #[error("{path}: expected {expected}")]
    TypeMismatch {
        /// JSON Pointer to the offending value.
        path: String,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// IO error reading or writing a catalog file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error constructing a [`ParameterSet`](crate::ParameterSet) from a table
/// of posterior samples.
#[derive(Error, Debug)]
pub enum SampleError {
    /// The sample table has no columns.
    #[error("sample table has no columns")]
    EmptyTable,

    /// A column has no rows (N = 0).
    #[error("column `{column}` has no rows")]
    EmptyColumn {
        /// Name of the empty column.
        column: String,
    },

    /// Columns have unequal lengths; the table must be rectangular.
    #[error("column `{column}` has {actual} rows, expected {expected}")]
    RaggedColumn {
        /// Name of the mismatched column.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of this column.
        actual: usize,
    },

    /// A sample value is NaN or infinite.
    #[error("column `{column}` contains a non-finite value at row {row}")]
    NonFinite {
        /// Name of the offending column.
        column: String,
        /// Zero-based row index of the first non-finite value.
        row: usize,
    },
}
