use super::Constraint;
use crate::propagators::set::DisjointPropagatorArgs;
use crate::propagators::set::MemberPropagatorArgs;
use crate::propagators::set::SubsetEqPropagatorArgs;
use crate::variables::IntegerVariable;
use crate::variables::SetId;

/// Creates the [`Constraint`] `subset ⊆ superset`.
pub fn subset_eq(subset: SetId, superset: SetId) -> impl Constraint {
    SubsetEqPropagatorArgs { subset, superset }
}

/// Creates the [`Constraint`] `a ∩ b = ∅`.
pub fn disjoint(a: SetId, b: SetId) -> impl Constraint {
    DisjointPropagatorArgs { a, b }
}

/// Creates the [`Constraint`] `element ∈ set`.
pub fn member(element: impl IntegerVariable + 'static, set: SetId) -> impl Constraint {
    MemberPropagatorArgs { element, set }
}
