use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::cp::DomainEvent;
use crate::engine::cp::OpaqueDomainEvent;
use crate::engine::cp::Watchers;
use crate::engine::predicates::PredicateConstructor;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// The behaviour of an integer variable: reading its domain and narrowing it.
///
/// Every narrowing operation returns `Ok(false)` if the domain already satisfies the requested
/// change, `Ok(true)` if the domain changed (in which case the matching [`DomainEvent`] has been
/// raised), and `Err(EmptyDomain)` if the change would leave the domain empty; in the latter case
/// the domain is left untouched.
pub trait IntegerVariable:
    Clone + std::fmt::Debug + PredicateConstructor<Value = i32> + TransformableVariable<Self::AffineView>
{
    type AffineView: IntegerVariable;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignments: &Assignments) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignments: &Assignments) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, assignments: &Assignments, value: i32) -> bool;

    /// The number of values in the domain.
    fn size(&self, assignments: &Assignments) -> u64;

    fn is_fixed(&self, assignments: &Assignments) -> bool {
        self.lower_bound(assignments) == self.upper_bound(assignments)
    }

    /// The smallest value in the domain which is strictly larger than `value`, or `i32::MAX` if
    /// there is none.
    fn next_value(&self, assignments: &Assignments, value: i32) -> i32;

    /// The largest value in the domain which is strictly smaller than `value`, or `i32::MIN` if
    /// there is none.
    fn previous_value(&self, assignments: &Assignments, value: i32) -> i32;

    /// Iterate over the values of the domain in ascending order.
    fn iterate_domain(&self, assignments: &Assignments) -> impl Iterator<Item = i32> {
        let upper_bound = self.upper_bound(assignments);
        let mut next = Some(self.lower_bound(assignments));

        std::iter::from_fn(move || {
            let current = next?;
            next = (current < upper_bound).then(|| self.next_value(assignments, current));
            Some(current)
        })
    }

    fn tighten_lower_bound(
        &self,
        assignments: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain>;

    fn tighten_upper_bound(
        &self,
        assignments: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain>;

    fn remove_value(&self, assignments: &mut Assignments, value: i32) -> Result<bool, EmptyDomain>;

    /// Removes every value in `[lower, upper]`.
    fn remove_interval(
        &self,
        assignments: &mut Assignments,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain>;

    /// Reduces the domain to the single value `value`.
    fn instantiate(&self, assignments: &mut Assignments, value: i32) -> Result<bool, EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>);

    /// Decode a domain event for this variable.
    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent;
}
