//! # Shipment allocations
//!
//! The result of any of the initial solution methods: for each source and destination pair, the
//! amount that is shipped.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::algorithm::evaluation::calculate_total_cost;
use crate::data::number::{total, Quantity};

/// Dense allocation matrix, one row per source and one column per destination.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Allocation<T> {
    rows: Vec<Vec<T>>,
    nr_columns: usize,
}

impl<T: Quantity> Allocation<T> {
    /// Create an allocation in which nothing is shipped.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            rows: vec![vec![T::zero(); nr_columns]; nr_rows],
            nr_columns,
        }
    }

    /// Wrap existing rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let nr_columns = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        Self { rows, nr_columns }
    }

    /// Number of sources.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of destinations.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Borrow the rows of the matrix.
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Total amount shipped from source `i`.
    pub fn row_sum(&self, i: usize) -> T {
        debug_assert!(i < self.nr_rows());

        total(&self.rows[i])
    }

    /// Total amount shipped to destination `j`.
    pub fn column_sum(&self, j: usize) -> T {
        debug_assert!(j < self.nr_columns());

        total(self.rows.iter().map(|row| &row[j]))
    }

    /// Number of cells in which a positive amount is shipped.
    pub fn nr_allocated_cells(&self) -> usize {
        self.rows.iter()
            .flatten()
            .filter(|&&value| value > T::zero())
            .count()
    }

    /// Whether fewer than `m + n - 1` cells are allocated.
    ///
    /// A basic feasible solution of the transportation problem has exactly `m + n - 1` basic cells;
    /// when some of them hold a zero, the solution is degenerate.
    pub fn is_degenerate(&self) -> bool {
        let nr_basic = (self.nr_rows() + self.nr_columns()).saturating_sub(1);
        self.nr_allocated_cells() < nr_basic
    }

    /// Whether every source ships exactly its supply and every destination receives exactly its
    /// demand.
    pub fn satisfies(&self, supply: &[T], demand: &[T]) -> bool {
        supply.len() == self.nr_rows() && demand.len() == self.nr_columns() &&
            supply.iter().enumerate().all(|(i, &s)| self.row_sum(i) == s) &&
            demand.iter().enumerate().all(|(j, &d)| self.column_sum(j) == d)
    }

    /// Cost of shipping these amounts.
    pub fn total_cost(&self, costs: &[Vec<T>]) -> T {
        calculate_total_cost(self, costs)
    }
}

impl<T> Index<(usize, usize)> for Allocation<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for Allocation<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[i][j]
    }
}

impl<T: Quantity> Display for Allocation<T> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let width = self.rows.iter()
            .flatten()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);

        let text = self.rows.iter()
            .map(|row| row.iter().map(|value| format!("{value:>width$}")).join(" "))
            .join("\n");
        f.write_str(&text)
    }
}
