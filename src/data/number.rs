//! # Number types
//!
//! Quantities and costs in a transportation problem share one numeric type.
use std::fmt::{Debug, Display};
use std::ops::{Mul, Sub};

use num_traits::Zero;

/// A supply, demand, cost or allocated amount.
///
/// Totally ordered, so that minima and maxima are well defined without tolerances. The algorithms
/// only subtract a smaller value from a larger one, which means that unsigned integers can be used.
pub trait Quantity:
    Copy +
    Ord +
    Zero +
    Sub<Output = Self> +
    Mul<Output = Self> +
    Debug +
    Display
{
}

impl<T> Quantity for T
where
    T: Copy + Ord + Zero + Sub<Output = T> + Mul<Output = T> + Debug + Display,
{
}

/// Sum all values, starting from zero.
pub fn total<'a, T: Quantity + 'a>(values: impl IntoIterator<Item = &'a T>) -> T {
    values.into_iter().fold(T::zero(), |total, &value| total + value)
}

#[cfg(test)]
mod test {
    use crate::data::number::total;

    #[test]
    fn total_of_values() {
        assert_eq!(total(&[1_u32, 2, 3]), 6);
        assert_eq!(total(&[-4_i64, 4]), 0);
        let empty: [u64; 0] = [];
        assert_eq!(total(&empty), 0);
    }
}
