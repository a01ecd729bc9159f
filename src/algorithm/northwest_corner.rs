//! # Northwest corner method
//!
//! Sweep the cost matrix from the top left to the bottom right, allocating as much as possible in
//! each cell. Costs are ignored, so the result is feasible but usually expensive.
use crate::algorithm::InitialSolution;
use crate::algorithm::utilities::Remaining;
use crate::data::allocation::Allocation;
use crate::data::number::Quantity;

/// Strategy type of the northwest corner method.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NorthwestCorner;

impl InitialSolution for NorthwestCorner {
    fn solve<T: Quantity>(&self, _costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Allocation<T> {
        northwest_corner(supply, demand)
    }
}

/// Allocate by a lexicographic sweep over sources and destinations.
///
/// When the remaining supply and demand are equal, both the source and the destination are
/// advanced at once.
pub fn northwest_corner<T: Quantity>(supply: &[T], demand: &[T]) -> Allocation<T> {
    let (m, n) = (supply.len(), demand.len());
    let mut remaining = Remaining::new(supply, demand);
    let mut allocation = Allocation::zeros(m, n);

    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        let quantity = remaining.allocate(i, j, &mut allocation);
        log::trace!("northwest corner: allocated {quantity} at ({i}, {j})");

        if !remaining.has_supply(i) {
            i += 1;
        }
        if !remaining.has_demand(j) {
            j += 1;
        }
    }

    allocation
}
