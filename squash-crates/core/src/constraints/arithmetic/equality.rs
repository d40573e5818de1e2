use super::inequality::Inequality;
use crate::constraints::Constraint;
use crate::predicate;
use crate::propagators::arithmetic::binary::BinaryNotEqualsPropagatorArgs;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `\sum terms_i = rhs`.
pub fn equals<Var: IntegerVariable + 'static>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    EqualConstraint {
        terms: terms.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `lhs = rhs`.
pub fn binary_equals<Var: IntegerVariable + 'static>(lhs: Var, rhs: Var) -> impl Constraint {
    equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

/// Creates the [`Constraint`] `lhs != rhs`.
pub fn binary_not_equals(
    lhs: impl IntegerVariable + 'static,
    rhs: impl IntegerVariable + 'static,
) -> impl Constraint {
    BinaryNotEqualsPropagatorArgs { a: lhs, b: rhs }
}

/// Creates the [`Constraint`] `variable != value`, which removes `value` from the domain at the
/// root.
pub fn not_equals<Var: IntegerVariable + 'static>(variable: Var, value: i32) -> impl Constraint {
    NotEqualsValue { variable, value }
}

struct EqualConstraint<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var: IntegerVariable + 'static> Constraint for EqualConstraint<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let negated = self
            .terms
            .iter()
            .map(|var| var.scaled(-1))
            .collect::<Box<[_]>>();

        Inequality {
            terms: self.terms,
            rhs: i64::from(self.rhs),
        }
        .post(solver)?;

        Inequality {
            terms: negated,
            rhs: -i64::from(self.rhs),
        }
        .post(solver)
    }
}

struct NotEqualsValue<Var> {
    variable: Var,
    value: i32,
}

impl<Var: IntegerVariable + 'static> Constraint for NotEqualsValue<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let NotEqualsValue { variable, value } = self;
        solver.post_predicate(predicate!(variable != value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ProblemSolution;
    use crate::results::SatisfactionResult;
    use crate::termination::Indefinite;

    #[test]
    fn equality_is_propagated_in_both_directions() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10).expect("valid bounds");
        let y = solver.new_bounded_integer(4, 6).expect("valid bounds");

        solver
            .add_constraint(equals([x, y], 12))
            .post()
            .expect("satisfiable");

        assert_eq!(6, solver.lower_bound(&x));
        assert_eq!(8, solver.upper_bound(&x));
    }

    #[test]
    fn binary_equality_over_a_view() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5).expect("valid bounds");
        let y = solver.new_bounded_integer(-3, 3).expect("valid bounds");

        // x = -y + 2
        solver
            .add_constraint(binary_equals(x.scaled(1), y.scaled(-1).offset(2)))
            .post()
            .expect("satisfiable");

        assert_eq!(0, solver.lower_bound(&x));
        assert_eq!(5, solver.upper_bound(&x));
        assert_eq!(-3, solver.lower_bound(&y));
        assert_eq!(2, solver.upper_bound(&y));
    }

    #[test]
    fn value_is_removed_at_the_root() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 1).expect("valid bounds");

        solver
            .add_constraint(not_equals(x, 0))
            .post()
            .expect("satisfiable");

        let mut brancher = solver.default_brancher();
        match solver.satisfy(&mut brancher, &mut Indefinite) {
            SatisfactionResult::Satisfiable(solution) => {
                assert_eq!(1, solution.get_integer_value(x))
            }
            result => panic!("expected a solution, got {result:?}"),
        }
    }

    #[test]
    fn binary_not_equals_on_fixed_variables_fails() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(3, 3).expect("valid bounds");
        let y = solver.new_bounded_integer(3, 3).expect("valid bounds");

        let result = solver.add_constraint(binary_not_equals(x, y)).post();

        assert_eq!(Err(ConstraintOperationError::InfeasiblePropagator), result);
    }
}
