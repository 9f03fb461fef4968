/*!
# Numeric Types

Capacities, flows and costs share a single exact integer type `T`. Any signed primitive integer
works; [`i64`] is the default throughout the crate. No floating-point tolerance is needed.
*/

use std::{
    fmt::{Debug, Display},
    iter::Sum,
};

use num::{PrimInt, Signed};

/// Signed primitive integers usable as capacity, flow and cost values
pub trait FlowNum: PrimInt + Signed + Debug + Display + Default + Sum + 'static {
    /// Sentinel used as "infinite" distance or capacity. Never added to.
    fn infinity() -> Self {
        Self::max_value()
    }
}

impl<T> FlowNum for T where T: PrimInt + Signed + Debug + Display + Default + Sum + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_of<T: FlowNum>(values: &[T]) -> T {
        values.iter().copied().fold(T::infinity(), |a, b| a.min(b))
    }

    #[test]
    fn works_for_all_signed_widths() {
        assert_eq!(min_of::<i32>(&[3, -1, 7]), -1);
        assert_eq!(min_of::<i64>(&[]), i64::MAX);
        assert_eq!(min_of::<i128>(&[5]), 5);
        assert_eq!(min_of::<isize>(&[2, 9]), 2);
    }
}
