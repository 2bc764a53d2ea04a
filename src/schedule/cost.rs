//! Task processing cost.

/// A task value that contributes a processing cost to the load of the
/// processor it is assigned to.
///
/// Implemented for all primitive integer and floating-point types, so
/// plain `Vec<u32>` or `Vec<f64>` task lists can be scheduled directly.
/// Domain types implement it to expose their duration.
///
/// # Examples
///
/// ```
/// use u_partition::schedule::TaskCost;
///
/// struct Job { minutes: u32 }
///
/// impl TaskCost for Job {
///     fn cost(&self) -> f64 {
///         self.minutes as f64
///     }
/// }
///
/// assert_eq!(Job { minutes: 7 }.cost(), 7.0);
/// assert_eq!(3u8.cost(), 3.0);
/// ```
pub trait TaskCost {
    /// Processing cost of this task. Expected to be non-negative.
    fn cost(&self) -> f64;
}

macro_rules! impl_task_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl TaskCost for $t {
                #[inline]
                fn cost(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_task_cost!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<T: TaskCost + ?Sized> TaskCost for &T {
    #[inline]
    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_costs() {
        assert_eq!(5u32.cost(), 5.0);
        assert_eq!((-2i64).cost(), -2.0);
        assert!((1.5f32.cost() - 1.5).abs() < 1e-12);
        assert_eq!(usize::MAX.cost(), usize::MAX as f64);
    }

    #[test]
    fn test_reference_cost() {
        let value = 9u16;
        let reference = &value;
        assert_eq!(reference.cost(), 9.0);
    }
}
