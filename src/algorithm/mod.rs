//! # Algorithms
//!
//! Methods that compute an initial basic feasible solution for a transportation problem, and the
//! routines that check problems and score their solutions.
//!
//! None of the methods try to improve on the solution they find; they are the starting point of
//! the transportation simplex method.
use std::fmt;

use enum_map::Enum;

use crate::data::allocation::Allocation;
use crate::data::number::Quantity;

pub mod evaluation;
pub mod northwest_corner;
pub mod russell;
mod utilities;
pub mod vogel;

pub use evaluation::{calculate_total_cost, is_balanced};
pub use northwest_corner::{northwest_corner, NorthwestCorner};
pub use russell::{russell_approximation, MaximaScope, Russell};
pub use vogel::{vogel_approximation, Vogel};

/// A way of finding an initial feasible solution.
///
/// Implementations don't check whether the problem is balanced. If it is not, the allocation that
/// they return does not ship exactly the supply and demand.
pub trait InitialSolution {
    /// Compute an allocation.
    ///
    /// # Arguments
    ///
    /// * `costs`: Unit shipping costs, one row per source and one column per destination.
    /// * `supply`: Amount available at each source.
    /// * `demand`: Amount required at each destination.
    ///
    /// # Return value
    ///
    /// An allocation of dimensions `supply.len()` by `demand.len()`.
    fn solve<T: Quantity>(&self, costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Allocation<T>;
}

/// The available initial solution methods, each with its default configuration.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Method {
    /// See `NorthwestCorner`.
    NorthwestCorner,
    /// See `Vogel`.
    Vogel,
    /// See `Russell`.
    Russell,
}

impl Method {
    /// All methods, from least to most cost-aware.
    pub const ALL: [Method; 3] = [Method::NorthwestCorner, Method::Vogel, Method::Russell];
}

impl InitialSolution for Method {
    fn solve<T: Quantity>(&self, costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Allocation<T> {
        log::debug!("{self}: {} sources, {} destinations", supply.len(), demand.len());

        match self {
            Method::NorthwestCorner => NorthwestCorner.solve(costs, supply, demand),
            Method::Vogel => Vogel.solve(costs, supply, demand),
            Method::Russell => Russell::default().solve(costs, supply, demand),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Method::NorthwestCorner => "Northwest Corner Method",
            Method::Vogel => "Vogel's Approximation Method",
            Method::Russell => "Russell's Approximation Method",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::{InitialSolution, Method, Russell};
    use crate::data::allocation::Allocation;

    #[test]
    fn single_cell() {
        for method in Method::ALL {
            assert_eq!(
                method.solve(&[vec![3_u32]], &[7], &[7]),
                Allocation::from_rows(vec![vec![7]]),
                "{method}",
            );
        }
        assert_eq!(
            Russell::textbook().solve(&[vec![3_u32]], &[7], &[7]),
            Allocation::from_rows(vec![vec![7]]),
        );
    }

    #[test]
    fn deterministic() {
        let costs = vec![vec![2_i64, 2, 2], vec![2, 2, 2]];
        for method in Method::ALL {
            let first = method.solve(&costs, &[3, 3], &[2, 2, 2]);
            let second = method.solve(&costs, &[3, 3], &[2, 2, 2]);
            assert_eq!(first, second);
            assert!(first.satisfies(&[3, 3], &[2, 2, 2]));
        }
    }
}
