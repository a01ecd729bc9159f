//! # Utilities
//!
//! Helper functions and bookkeeping shared by the initial solution methods.
use std::cmp::Reverse;

use crate::data::allocation::Allocation;
use crate::data::number::Quantity;

/// Supply and demand that has not been allocated yet.
///
/// Every method works on its own copy, the caller's vectors are never modified.
#[derive(Debug, Clone)]
pub(crate) struct Remaining<T> {
    supply: Vec<T>,
    demand: Vec<T>,
}

impl<T: Quantity> Remaining<T> {
    pub(crate) fn new(supply: &[T], demand: &[T]) -> Self {
        Self {
            supply: supply.to_vec(),
            demand: demand.to_vec(),
        }
    }

    pub(crate) fn has_supply(&self, i: usize) -> bool {
        self.supply[i] > T::zero()
    }

    pub(crate) fn has_demand(&self, j: usize) -> bool {
        self.demand[j] > T::zero()
    }

    /// Sources that still have something to ship, in index order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        (0..self.supply.len()).filter(move |&i| self.has_supply(i))
    }

    /// Destinations that still need something, in index order.
    pub(crate) fn columns(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        (0..self.demand.len()).filter(move |&j| self.has_demand(j))
    }

    /// Ship as much as possible from source `i` to destination `j`.
    ///
    /// # Return value
    ///
    /// The amount shipped, the minimum of the remaining supply and demand.
    pub(crate) fn allocate(&mut self, i: usize, j: usize, allocation: &mut Allocation<T>) -> T {
        let quantity = self.supply[i].min(self.demand[j]);
        // A cell is never visited twice: afterwards, either its row or its column is exhausted
        debug_assert!(allocation[(i, j)] == T::zero());

        allocation[(i, j)] = quantity;
        self.supply[i] = self.supply[i] - quantity;
        self.demand[j] = self.demand[j] - quantity;

        quantity
    }
}

/// Find the first element with the largest key.
///
/// `Iterator::max_by_key` returns the last of several maximal elements, which breaks the
/// lowest-index-first tie breaking that the methods rely on.
pub(crate) fn first_maximum<I, K, F>(iter: I, mut key: F) -> Option<I::Item>
where
    I: Iterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    iter.min_by_key(|item| Reverse(key(item)))
}
