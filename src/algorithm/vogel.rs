//! # Vogel's approximation method
//!
//! Every iteration, each source and each destination with remaining capacity gets a penalty: the
//! difference between its two cheapest feasible cells. That is what it costs not to use its
//! cheapest cell. The line with the highest penalty is served first, in its cheapest cell.
use itertools::Itertools;

use crate::algorithm::InitialSolution;
use crate::algorithm::utilities::{first_maximum, Remaining};
use crate::data::allocation::Allocation;
use crate::data::number::Quantity;

/// Strategy type of Vogel's approximation method.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Vogel;

impl InitialSolution for Vogel {
    fn solve<T: Quantity>(&self, costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Allocation<T> {
        vogel_approximation(costs, supply, demand)
    }
}

/// Allocate greedily, serving the row or column with the largest cost penalty first.
///
/// Ties between penalties are broken in favor of the lowest index, and a row wins from a column
/// with an equal penalty. Within the selected line, the cheapest cell with the lowest index is
/// chosen.
pub fn vogel_approximation<T: Quantity>(
    costs: &[Vec<T>],
    supply: &[T],
    demand: &[T],
) -> Allocation<T> {
    debug_assert_eq!(costs.len(), supply.len());
    debug_assert!(costs.iter().all(|row| row.len() == demand.len()));

    let mut remaining = Remaining::new(supply, demand);
    let mut allocation = Allocation::zeros(supply.len(), demand.len());

    while let Some((i, j)) = select_cell(costs, &remaining) {
        let quantity = remaining.allocate(i, j, &mut allocation);
        log::trace!("vogel: allocated {quantity} at ({i}, {j})");
    }

    allocation
}

/// Penalty of a line, given the costs of its feasible cells.
///
/// The difference between the two smallest costs, or the cost itself if there is only one cell.
/// There is no penalty for a line without feasible cells.
fn penalty<T: Quantity>(costs: impl Iterator<Item = T>) -> Option<T> {
    let mut smallest = costs.k_smallest(2);
    match (smallest.next(), smallest.next()) {
        (Some(first), Some(second)) => Some(second - first),
        (Some(only), None) => Some(only),
        (None, _) => None,
    }
}

/// Choose the next cell to allocate in, if any feasible cell remains.
fn select_cell<T: Quantity>(costs: &[Vec<T>], remaining: &Remaining<T>) -> Option<(usize, usize)> {
    let row_penalties = remaining.rows()
        .filter_map(|i| penalty(remaining.columns().map(|j| costs[i][j])).map(|p| (i, p)));
    let column_penalties = remaining.columns()
        .filter_map(|j| penalty(remaining.rows().map(|i| costs[i][j])).map(|p| (j, p)));

    let row = first_maximum(row_penalties, |&(_, p)| p);
    let column = first_maximum(column_penalties, |&(_, p)| p);

    match (row, column) {
        (Some((i, row_penalty)), Some((_, column_penalty))) if row_penalty >= column_penalty => {
            cheapest_in_row(costs, remaining, i)
        },
        (Some((i, _)), None) => cheapest_in_row(costs, remaining, i),
        (_, Some((j, _))) => cheapest_in_column(costs, remaining, j),
        (None, None) => None,
    }
}

fn cheapest_in_row<T: Quantity>(
    costs: &[Vec<T>],
    remaining: &Remaining<T>,
    i: usize,
) -> Option<(usize, usize)> {
    remaining.columns()
        .min_by_key(|&j| costs[i][j])
        .map(|j| (i, j))
}

fn cheapest_in_column<T: Quantity>(
    costs: &[Vec<T>],
    remaining: &Remaining<T>,
    j: usize,
) -> Option<(usize, usize)> {
    remaining.rows()
        .min_by_key(|&i| costs[i][j])
        .map(|i| (i, j))
}
