use crate::constraints::Constraint;
use crate::propagators::arithmetic::binary::BinaryLessOrEqualPropagatorArgs;
use crate::propagators::arithmetic::LinearLessOrEqualPropagatorArgs;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Create the [`Constraint`] `\sum terms_i <= rhs`.
pub fn less_than_or_equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    Inequality {
        terms: terms.into(),
        rhs: i64::from(rhs),
    }
}

/// Creates the [`Constraint`] `lhs <= rhs`.
pub fn binary_less_than_or_equals(
    lhs: impl IntegerVariable + 'static,
    rhs: impl IntegerVariable + 'static,
) -> impl Constraint {
    BinaryLessOrEqualPropagatorArgs { a: lhs, b: rhs }
}

/// Creates the [`Constraint`] `lhs < rhs`.
pub fn binary_less_than<Var: IntegerVariable + 'static>(lhs: Var, rhs: Var) -> impl Constraint {
    binary_less_than_or_equals(lhs, rhs.offset(-1))
}

pub(super) struct Inequality<Var> {
    pub(super) terms: Box<[Var]>,
    pub(super) rhs: i64,
}

impl<Var: IntegerVariable + 'static> Constraint for Inequality<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.terms.is_empty() {
            return Err(ConstraintOperationError::EmptyScope);
        }

        LinearLessOrEqualPropagatorArgs {
            x: self.terms,
            c: self.rhs,
        }
        .post(solver)
    }
}
