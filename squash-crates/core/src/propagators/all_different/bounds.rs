use super::instantiation::is_entailed_by_fixed_values;
use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::IntegerVariable;
use crate::propagation::DomainEvents;
use crate::propagation::Entailment;
use crate::propagation::LocalId;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`AllDifferentBoundsPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentBoundsArgs<Var> {
    pub(crate) vars: Box<[Var]>,
}

impl<Var> PropagatorConstructor for AllDifferentBoundsArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = AllDifferentBoundsPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let AllDifferentBoundsArgs { vars } = self;

        for (i, x_i) in vars.iter().enumerate() {
            context.register(x_i.clone(), DomainEvents::BOUNDS, LocalId::from(i as u32));
        }

        AllDifferentBoundsPropagator { vars }
    }
}

/// Bounds-consistent propagator for the constraint `x_i != x_j` for all `i != j`, based on Hall
/// intervals \[1\].
///
/// An interval `[l, u]` is a Hall interval if exactly `u - l + 1` variables have their domain
/// within it; those variables take all of its values, so the bounds of every other variable are
/// pushed out of the interval. More variables than values within an interval is a contradiction.
///
/// Every pair of a lower and an upper bound is checked, and this is repeated until no bound
/// changes.
///
/// # Bibliography
/// \[1\] J.-F. Puget, ‘A fast algorithm for the bound consistency of alldiff constraints’, in
/// AAAI/IAAI, 1998, pp. 359–366.
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentBoundsPropagator<Var> {
    vars: Box<[Var]>,
}

impl<Var: IntegerVariable> AllDifferentBoundsPropagator<Var> {
    /// Applies every Hall interval which is present in the current bounds. Returns whether a bound
    /// changed.
    fn apply_hall_intervals(&self, context: &mut PropagationContextMut) -> Result<bool, ()> {
        let bounds = self
            .vars
            .iter()
            .map(|x_i| (context.lower_bound(x_i), context.upper_bound(x_i)))
            .collect::<Vec<_>>();

        let mut lower_bounds = bounds.iter().map(|&(lb, _)| lb).collect::<Vec<_>>();
        lower_bounds.sort_unstable();
        lower_bounds.dedup();
        let mut upper_bounds = bounds.iter().map(|&(_, ub)| ub).collect::<Vec<_>>();
        upper_bounds.sort_unstable();
        upper_bounds.dedup();

        let mut changed = false;

        for &low in &lower_bounds {
            for &high in upper_bounds.iter().filter(|&&high| high >= low) {
                let num_inside = bounds
                    .iter()
                    .filter(|&&(lb, ub)| low <= lb && ub <= high)
                    .count() as i64;
                let num_values = high as i64 - low as i64 + 1;

                if num_inside > num_values {
                    return Err(());
                }
                if num_inside < num_values {
                    continue;
                }

                for (x_i, &(lb, ub)) in self.vars.iter().zip(bounds.iter()) {
                    if low <= lb && ub <= high {
                        continue;
                    }

                    if (low..=high).contains(&context.lower_bound(x_i)) {
                        changed |= context.tighten_lower_bound(x_i, high + 1).map_err(|_| ())?;
                    }
                    if (low..=high).contains(&context.upper_bound(x_i)) {
                        changed |= context.tighten_upper_bound(x_i, low - 1).map_err(|_| ())?;
                    }
                }
            }
        }

        Ok(changed)
    }

    /// Removes the values of the fixed variables from the interior of the other domains, which the
    /// bound reasoning leaves untouched.
    fn remove_fixed_values(&self, context: &mut PropagationContextMut) -> PropagationStatusCP {
        for (i, x_i) in self.vars.iter().enumerate() {
            if !context.is_fixed(x_i) {
                continue;
            }

            let value = context.lower_bound(x_i);
            for (j, x_j) in self.vars.iter().enumerate() {
                if i != j {
                    let _ = context.remove_value(x_j, value)?;
                }
            }
        }

        Ok(())
    }
}

impl<Var: IntegerVariable + 'static> Propagator for AllDifferentBoundsPropagator<Var> {
    fn name(&self) -> &str {
        "AllDiffBounds"
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        loop {
            match self.apply_hall_intervals(&mut context) {
                Ok(true) => {}
                Ok(false) => break,
                Err(()) => return Err(context.conflict()),
            }
        }

        self.remove_fixed_values(&mut context)
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        is_entailed_by_fixed_values(&self.vars, context)
    }
}
