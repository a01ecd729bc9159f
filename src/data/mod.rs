//! # Storing of transportation problems in memory
//!
//! This module provides the data structures used to represent transportation problems and their
//! solutions in memory.

pub mod allocation;
pub mod error;
pub mod number;
pub mod problem;
