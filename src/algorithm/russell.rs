//! # Russell's approximation method
//!
//! Each source `i` and destination `j` is given an estimate of its opportunity cost: the largest
//! unit cost in its row, `u[i]`, and column, `v[j]`. The cell for which `cost[i][j] - u[i] - v[j]`
//! is most negative is allocated first.
use std::fmt;

use crate::algorithm::InitialSolution;
use crate::algorithm::utilities::{first_maximum, Remaining};
use crate::data::allocation::Allocation;
use crate::data::number::Quantity;

/// Strategy type of Russell's approximation method.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Russell {
    /// Which cells are considered when computing the row and column maxima.
    pub scope: MaximaScope,
}

impl Russell {
    /// Russell's method as it is usually described in textbooks.
    pub fn textbook() -> Self {
        Self { scope: MaximaScope::Feasible }
    }
}

impl InitialSolution for Russell {
    fn solve<T: Quantity>(&self, costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Allocation<T> {
        russell_approximation_with_scope(costs, supply, demand, self.scope)
    }
}

/// Cells over which the row and column maxima `u` and `v` are taken.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MaximaScope {
    /// All cells of the cost matrix. The maxima are computed once.
    #[default]
    AllCells,
    /// Only cells with remaining supply and demand. The maxima are recomputed every iteration.
    Feasible,
}

impl fmt::Display for MaximaScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MaximaScope::AllCells => "all cells",
            MaximaScope::Feasible => "feasible cells",
        })
    }
}

/// Allocate greedily in the cell with the smallest `cost[i][j] - u[i] - v[j]`.
///
/// The maxima `u` and `v` are taken over all cells of the cost matrix, not only over those that
/// are still feasible. Ties are broken by taking the first cell in row-major order.
pub fn russell_approximation<T: Quantity>(
    costs: &[Vec<T>],
    supply: &[T],
    demand: &[T],
) -> Allocation<T> {
    russell_approximation_with_scope(costs, supply, demand, MaximaScope::AllCells)
}

/// Russell's approximation method, with the maxima taken over the given scope.
pub fn russell_approximation_with_scope<T: Quantity>(
    costs: &[Vec<T>],
    supply: &[T],
    demand: &[T],
    scope: MaximaScope,
) -> Allocation<T> {
    debug_assert_eq!(costs.len(), supply.len());
    debug_assert!(costs.iter().all(|row| row.len() == demand.len()));

    let mut remaining = Remaining::new(supply, demand);
    let mut allocation = Allocation::zeros(supply.len(), demand.len());

    let mut maxima = Maxima::over_all_cells(costs, demand.len());
    loop {
        if scope == MaximaScope::Feasible {
            maxima = Maxima::over_feasible_cells(costs, &remaining);
        }
        let Some((i, j)) = maxima.best_cell(costs, &remaining) else { break };

        let quantity = remaining.allocate(i, j, &mut allocation);
        log::trace!("russell ({scope}): allocated {quantity} at ({i}, {j})");
    }

    allocation
}

/// Row maxima `u` and column maxima `v`.
///
/// Values for rows or columns without cells in scope are zero; they are never read.
struct Maxima<T> {
    rows: Vec<T>,
    columns: Vec<T>,
}

impl<T: Quantity> Maxima<T> {
    fn over_all_cells(costs: &[Vec<T>], nr_columns: usize) -> Self {
        Self {
            rows: costs.iter()
                .map(|row| row.iter().copied().max().unwrap_or_else(T::zero))
                .collect(),
            columns: (0..nr_columns)
                .map(|j| costs.iter().map(|row| row[j]).max().unwrap_or_else(T::zero))
                .collect(),
        }
    }

    fn over_feasible_cells(costs: &[Vec<T>], remaining: &Remaining<T>) -> Self {
        let mut rows = vec![T::zero(); costs.len()];
        for i in remaining.rows() {
            rows[i] = remaining.columns().map(|j| costs[i][j]).max().unwrap_or_else(T::zero);
        }
        let mut columns = vec![T::zero(); costs.first().map_or(0, Vec::len)];
        for j in remaining.columns() {
            columns[j] = remaining.rows().map(|i| costs[i][j]).max().unwrap_or_else(T::zero);
        }

        Self { rows, columns }
    }

    /// Feasible cell with the smallest `cost[i][j] - u[i] - v[j]`, first in row-major order.
    ///
    /// Because `u[i]` and `v[j]` are at least `cost[i][j]`, this is computed as the cell with the
    /// largest `(v[j] - cost[i][j]) + u[i]`, which is never negative. Subtracting first keeps the
    /// intermediate value within range whenever the result is.
    fn best_cell(&self, costs: &[Vec<T>], remaining: &Remaining<T>) -> Option<(usize, usize)> {
        let cells = remaining.rows()
            .flat_map(|i| remaining.columns().map(move |j| (i, j)));

        first_maximum(cells, |&(i, j)| (self.columns[j] - costs[i][j]) + self.rows[i])
    }
}
