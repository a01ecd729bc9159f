//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn costs()`
//! * `fn supply()`
//! * `fn demand()`
//! * `fn problem()`
pub mod small_problems;
