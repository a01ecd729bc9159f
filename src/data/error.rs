//! # Problems with problem data
//!
//! Errors describing why data does not form a transportation problem, or why a transportation
//! problem can't be solved by the initial solution methods.
use std::error::Error;
use std::fmt;

use crate::data::number::Quantity;

/// The cost matrix, supply and demand don't form a transportation problem.
///
/// Either their dimensions don't agree, or one of the values is negative.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum ShapeError {
    /// There are no sources or no destinations.
    Empty,
    /// A row of the cost matrix has a different length than the first row.
    RaggedCosts {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The number of supply values is not the number of cost matrix rows.
    Supply {
        /// Number of cost matrix rows.
        expected: usize,
        /// Number of supply values.
        found: usize,
    },
    /// The number of demand values is not the number of cost matrix columns.
    Demand {
        /// Number of cost matrix columns.
        expected: usize,
        /// Number of demand values.
        found: usize,
    },
    /// A value is below zero.
    Negative(Entry),
}

/// Position of a single value in a transportation problem.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Entry {
    /// Supply of the source with this index.
    Supply(usize),
    /// Demand of the destination with this index.
    Demand(usize),
    /// Unit cost from a source to a destination.
    Cost(usize, usize),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Entry::Supply(i) => write!(f, "supply of source {}", i + 1),
            Entry::Demand(j) => write!(f, "demand of destination {}", j + 1),
            Entry::Cost(i, j) => write!(f, "cost from source {} to destination {}", i + 1, j + 1),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShapeError::Empty => write!(f, "there should be at least one source and one destination"),
            ShapeError::RaggedCosts { row, expected, found } => write!(
                f, "cost row {} has {} values, expected {}", row + 1, found, expected,
            ),
            ShapeError::Supply { expected, found } => write!(
                f, "expected {expected} supply values, one for each cost row, found {found}",
            ),
            ShapeError::Demand { expected, found } => write!(
                f, "expected {expected} demand values, one for each cost column, found {found}",
            ),
            ShapeError::Negative(entry) => write!(f, "{entry} is negative"),
        }
    }
}

impl Error for ShapeError {}

/// Total supply differs from total demand.
///
/// None of the initial solution methods check this themselves. When they are run anyway, the
/// allocation they produce doesn't match the supply and demand.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Unbalanced<T> {
    /// Sum of all supply values.
    pub total_supply: T,
    /// Sum of all demand values.
    pub total_demand: T,
}

impl<T: Quantity> fmt::Display for Unbalanced<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "the problem is not balanced: total supply is {}, total demand is {}",
            self.total_supply, self.total_demand,
        )
    }
}

impl<T: Quantity> Error for Unbalanced<T> {}
