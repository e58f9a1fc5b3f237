//! # gwcat-cli — Command Handlers
//!
//! Handler modules for the `gwcat` binary. The binary itself only parses
//! arguments and dispatches here.

pub mod validate;
