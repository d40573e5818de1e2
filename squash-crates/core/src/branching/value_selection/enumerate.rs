use crate::branching::value_selection::ValueSelector;
use crate::branching::Branch;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::predicate;
use crate::propagation::ReadDomains;

/// Determines the order in which an [`Enumerate`] value selector tries the values of a domain.
pub trait ValueOrdering {
    /// Reorders `values`, which holds the current domain in ascending order. The result has to be
    /// a permutation of the input so that the enumeration stays complete.
    fn order(&mut self, values: &mut Vec<i32>);
}

/// A [`ValueSelector`] which creates an n-ary [`Branch`] with one alternative `[x == v]` for every
/// value `v` in the domain, in the order given by the [`ValueOrdering`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumerate<Ordering> {
    ordering: Ordering,
}

impl<Ordering: ValueOrdering> Enumerate<Ordering> {
    pub fn new(ordering: Ordering) -> Self {
        Enumerate { ordering }
    }
}

impl<Var: IntegerVariable, Ordering: ValueOrdering> ValueSelector<Var> for Enumerate<Ordering> {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch {
        let mut values = context.iterate_domain(&decision_variable).collect::<Vec<_>>();
        self.ordering.order(&mut values);

        Branch::new(
            values
                .into_iter()
                .map(|value| Decision::Integer(predicate!(decision_variable == value)))
                .collect(),
        )
    }
}

/// Tries the values from small to large.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

/// Tries the values from large to small.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

/// Tries the values by increasing distance to the middle of the bounds, the lower value first on
/// ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiddleOut;

/// Defers the first `n` values of the inner ordering to the end of the enumeration.
#[derive(Debug, Clone, Copy)]
pub struct DropN<Inner> {
    n: usize,
    inner: Inner,
}

impl<Inner: ValueOrdering> DropN<Inner> {
    pub fn new(n: usize, inner: Inner) -> Self {
        DropN { n, inner }
    }
}

impl ValueOrdering for Ascending {
    fn order(&mut self, _values: &mut Vec<i32>) {}
}

impl ValueOrdering for Descending {
    fn order(&mut self, values: &mut Vec<i32>) {
        values.reverse();
    }
}

impl ValueOrdering for MiddleOut {
    fn order(&mut self, values: &mut Vec<i32>) {
        let (Some(&lower_bound), Some(&upper_bound)) = (values.iter().min(), values.iter().max())
        else {
            return;
        };
        let doubled_middle = lower_bound as i64 + upper_bound as i64;

        values.sort_by_key(|&value| ((2 * value as i64 - doubled_middle).abs(), value));
    }
}

impl<Inner: ValueOrdering> ValueOrdering for DropN<Inner> {
    fn order(&mut self, values: &mut Vec<i32>) {
        self.inner.order(values);

        let num_dropped = self.n.min(values.len());
        values.rotate_left(num_dropped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    fn ordered(mut ordering: impl ValueOrdering, values: &[i32]) -> Vec<i32> {
        let mut values = values.to_vec();
        ordering.order(&mut values);
        values
    }

    #[test]
    fn orderings_are_permutations_of_the_domain() {
        assert_eq!(vec![1, 2, 3, 4], ordered(Ascending, &[1, 2, 3, 4]));
        assert_eq!(vec![4, 3, 2, 1], ordered(Descending, &[1, 2, 3, 4]));
        assert_eq!(vec![2, 3, 1, 4], ordered(MiddleOut, &[1, 2, 3, 4]));
        assert_eq!(vec![3, 2, 4, 1, 5], ordered(MiddleOut, &[1, 2, 3, 4, 5]));
    }

    #[test]
    fn drop_n_defers_values_to_the_end() {
        assert_eq!(
            vec![3, 4, 1, 2],
            ordered(DropN::new(2, Ascending), &[1, 2, 3, 4])
        );
        assert_eq!(
            vec![3, 2, 1, 4],
            ordered(DropN::new(1, Descending), &[1, 2, 3, 4])
        );
        assert_eq!(vec![1, 2], ordered(DropN::new(7, Ascending), &[1, 2]));
    }

    #[test]
    fn enumeration_creates_an_alternative_per_value() {
        let mut assignments = SelectionContext::create_for_testing(vec![(1, 4)]);
        let x = assignments.get_domains().next().unwrap();
        let _ = assignments.remove_value_from_domain(x, 2);

        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);

        let branch = Enumerate::new(Descending).select_value(&mut context, x);
        assert_eq!(
            Branch::new(vec![
                predicate!(x == 4).into(),
                predicate!(x == 3).into(),
                predicate!(x == 1).into()
            ]),
            branch
        );
    }
}
