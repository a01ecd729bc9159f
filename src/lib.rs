//! # Initial solutions for the transportation problem
//!
//! A transportation problem asks how to ship goods from sources with a fixed supply to
//! destinations with a fixed demand, at a given cost per unit shipped between each pair. This crate
//! computes initial basic feasible solutions with the northwest corner method, Vogel's
//! approximation method and Russell's approximation method.
//!
//! ```
//! use transport::algorithm::{calculate_total_cost, is_balanced, vogel_approximation};
//!
//! let costs = vec![vec![4_u32, 6], vec![5, 3]];
//! let (supply, demand) = ([30, 20], [25, 25]);
//!
//! assert!(is_balanced(&supply, &demand));
//! let solution = vogel_approximation(&costs, &supply, &demand);
//! assert_eq!(calculate_total_cost(&solution, &costs), 25 * 4 + 5 * 6 + 20 * 3);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
