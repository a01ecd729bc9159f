//! # Checking and scoring problems and their solutions
use crate::data::allocation::Allocation;
use crate::data::number::{total, Quantity};

/// Whether total supply equals total demand, exactly.
///
/// This is a precondition for all initial solution methods, but none of them check it. Callers
/// should check it first, and not run a method when it doesn't hold.
pub fn is_balanced<T: Quantity>(supply: &[T], demand: &[T]) -> bool {
    total(supply) == total(demand)
}

/// Total cost of an allocation: the sum over all cells of the amount shipped times the unit cost.
///
/// # Arguments
///
/// * `solution`: Amounts shipped.
/// * `costs`: Unit costs, of the same dimensions as `solution`.
pub fn calculate_total_cost<T: Quantity>(solution: &Allocation<T>, costs: &[Vec<T>]) -> T {
    debug_assert_eq!(solution.nr_rows(), costs.len());
    debug_assert!(costs.iter().all(|row| row.len() == solution.nr_columns()));

    solution.rows().iter()
        .zip(costs)
        .flat_map(|(amounts, costs)| amounts.iter().zip(costs))
        .fold(T::zero(), |total, (&amount, &cost)| total + amount * cost)
}
