//! # Transportation problems
//!
//! A balanced transportation problem consists of sources with a supply, destinations with a
//! demand, and a unit shipping cost for every pair of them.
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::EnumMap;

use crate::algorithm::{InitialSolution, Method, is_balanced};
use crate::data::allocation::Allocation;
use crate::data::error::{Entry, ShapeError, Unbalanced};
use crate::data::number::{total, Quantity};

/// A transportation problem of consistent dimensions.
///
/// The problem is not necessarily balanced; this is checked before solving.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Problem<T> {
    /// Unit shipping cost, one row per source and one column per destination.
    costs: Vec<Vec<T>>,
    /// Amount available at each source.
    supply: Vec<T>,
    /// Amount required at each destination.
    demand: Vec<T>,
}

impl<T: Quantity> Problem<T> {
    /// Create a new problem.
    ///
    /// # Errors
    ///
    /// If there are no sources or destinations, if the cost matrix is not rectangular, if the
    /// number of supply or demand values doesn't match it, or if any value is negative.
    pub fn new(costs: Vec<Vec<T>>, supply: Vec<T>, demand: Vec<T>) -> Result<Self, ShapeError> {
        let nr_columns = match costs.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(ShapeError::Empty),
        };
        if let Some((row, found)) = costs.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != nr_columns) {
            return Err(ShapeError::RaggedCosts { row, expected: nr_columns, found });
        }
        if supply.len() != costs.len() {
            return Err(ShapeError::Supply { expected: costs.len(), found: supply.len() });
        }
        if demand.len() != nr_columns {
            return Err(ShapeError::Demand { expected: nr_columns, found: demand.len() });
        }

        let negative = supply.iter().position(|&value| value < T::zero()).map(Entry::Supply)
            .or_else(|| demand.iter().position(|&value| value < T::zero()).map(Entry::Demand))
            .or_else(|| costs.iter().enumerate().find_map(|(i, row)| {
                row.iter().position(|&value| value < T::zero()).map(|j| Entry::Cost(i, j))
            }));
        if let Some(entry) = negative {
            return Err(ShapeError::Negative(entry));
        }

        Ok(Self { costs, supply, demand })
    }

    /// Unit shipping costs.
    pub fn costs(&self) -> &[Vec<T>] {
        &self.costs
    }

    /// Supply of all sources.
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// Demand of all destinations.
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    /// Number of sources `m`.
    pub fn nr_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations `n`.
    pub fn nr_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Whether the total supply equals the total demand.
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.supply, &self.demand)
    }

    fn check_balance(&self) -> Result<(), Unbalanced<T>> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(Unbalanced {
                total_supply: total(&self.supply),
                total_demand: total(&self.demand),
            })
        }
    }

    /// Compute an initial feasible solution with one of the default methods.
    ///
    /// # Errors
    ///
    /// When the problem is not balanced; no method is run in that case.
    pub fn solve(&self, method: Method) -> Result<Allocation<T>, Unbalanced<T>> {
        self.solve_with(&method)
    }

    /// Compute an initial feasible solution with a specific strategy.
    ///
    /// # Errors
    ///
    /// When the problem is not balanced; the strategy is not run in that case.
    pub fn solve_with<S: InitialSolution>(&self, strategy: &S) -> Result<Allocation<T>, Unbalanced<T>> {
        self.check_balance()?;

        Ok(strategy.solve(&self.costs, &self.supply, &self.demand))
    }

    /// Compute an initial feasible solution with every method.
    ///
    /// # Errors
    ///
    /// When the problem is not balanced; no method is run in that case.
    pub fn solve_all(&self) -> Result<EnumMap<Method, Allocation<T>>, Unbalanced<T>> {
        self.check_balance()?;

        Ok(EnumMap::from_fn(|method: Method| method.solve(&self.costs, &self.supply, &self.demand)))
    }

    /// Cost of shipping according to an allocation for this problem.
    pub fn total_cost(&self, allocation: &Allocation<T>) -> T {
        allocation.total_cost(&self.costs)
    }

    /// The method whose solution is cheapest, with that cost.
    ///
    /// Of methods with equal cost, the one listed first in `Method` is returned.
    pub fn cheapest(&self, solutions: &EnumMap<Method, Allocation<T>>) -> (Method, T) {
        let first = Method::ALL[0];
        let mut cheapest = (first, self.total_cost(&solutions[first]));
        for (method, allocation) in solutions {
            let cost = self.total_cost(allocation);
            if cost < cheapest.1 {
                cheapest = (method, cost);
            }
        }

        cheapest
    }
}

/// Transportation table: a row per source with its costs and supply, and a final row of demands.
impl<T: Quantity> Display for Problem<T> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let label_width = "Demand".len().max(format!("S{}", self.nr_sources()).len());
        let width = 2 + self.costs.iter()
            .flatten()
            .chain(&self.demand)
            .map(|value| value.to_string().len())
            .chain([format!("D{}", self.nr_destinations()).len()])
            .max()
            .unwrap_or(0);
        let supply_width = "Supply".len();

        // Column labels
        write!(f, "{:label_width$}", "")?;
        for j in 0..self.nr_destinations() {
            write!(f, "{:>width$}", format!("D{}", j + 1))?;
        }
        writeln!(f, "  Supply")?;

        // Costs and supply per source
        for (i, (row, supply)) in self.costs.iter().zip(&self.supply).enumerate() {
            write!(f, "{:<label_width$}", format!("S{}", i + 1))?;
            for cost in row {
                write!(f, "{cost:>width$}")?;
            }
            writeln!(f, "  {supply:>supply_width$}")?;
        }

        write!(f, "{:<label_width$}", "Demand")?;
        for demand in &self.demand {
            write!(f, "{demand:>width$}")?;
        }

        Ok(())
    }
}
