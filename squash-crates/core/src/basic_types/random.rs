use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::squash_assert_moderate;

/// Abstraction over the source of randomness used by the randomised heuristics.
///
/// Any seedable generator from `rand` implements it; tests can use a scripted implementation to
/// make randomised choices predictable.
pub trait Random: Debug {
    /// Generates a bool which is `true` with the given probability, which must lie in `[0, 1]`.
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// Samples uniformly from `[range.start, range.end)`.
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use squash_core::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let elements = vec!["This", "is", "a", "test"];
    ///
    /// let selected_index = rng.generate_usize_in_range(0..elements.len());
    /// assert!(selected_index < elements.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;

    /// Samples uniformly from `[lb, ub]`.
    fn generate_i32_in_range(&mut self, lb: i32, ub: i32) -> i32;
}

impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        squash_assert_moderate!(
            (0.0..=1.0).contains(&probability),
            "It should hold that 0.0 <= {probability} <= 1.0"
        );

        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }

    fn generate_i32_in_range(&mut self, lb: i32, ub: i32) -> i32 {
        self.gen_range(lb..=ub)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use super::Random;
    use crate::squash_assert_simple;

    /// A "random" generator which hands out the provided values in order. Running out of values
    /// panics, as does handing out a value outside of the requested range.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
        pub(crate) integers: Vec<i32>,
        pub(crate) bools: Vec<bool>,
    }

    impl Random for TestRandom {
        fn generate_bool(&mut self, _probability: f64) -> bool {
            self.bools.remove(0)
        }

        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let selected = self.usizes.remove(0);
            squash_assert_simple!(
                range.contains(&selected),
                "The scripted value {selected} is not in the requested range {range:?}"
            );
            selected
        }

        fn generate_i32_in_range(&mut self, lb: i32, ub: i32) -> i32 {
            let selected = self.integers.remove(0);
            squash_assert_simple!(
                (lb..=ub).contains(&selected),
                "The scripted value {selected} is not in the requested range [{lb}, {ub}]"
            );
            selected
        }
    }
}
