use std::fmt::Display;
use std::hash::Hash;

use super::Constraint;
use crate::containers::HashSet;
use crate::propagators::all_different::AllDifferentBoundsArgs;
use crate::propagators::all_different::AllDifferentInstantiationArgs;
use crate::variables::IntegerVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// How much filtering the all-different constraint performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AllDifferentStrength {
    /// Only reacts to variables becoming fixed, removing their value from the other variables.
    #[default]
    Instantiation,
    /// Additionally enforces bounds consistency through Hall intervals.
    Bounds,
}

impl Display for AllDifferentStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllDifferentStrength::Instantiation => write!(f, "instantiation"),
            AllDifferentStrength::Bounds => write!(f, "bounds"),
        }
    }
}

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
///
/// The scope has to be non-empty and may not contain the same variable twice.
pub fn all_different<Var>(
    variables: impl Into<Box<[Var]>>,
    strength: AllDifferentStrength,
) -> impl Constraint
where
    Var: IntegerVariable + Eq + Hash + 'static,
{
    AllDifferent {
        variables: variables.into(),
        strength,
    }
}

struct AllDifferent<Var> {
    variables: Box<[Var]>,
    strength: AllDifferentStrength,
}

impl<Var> Constraint for AllDifferent<Var>
where
    Var: IntegerVariable + Eq + Hash + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        if self.variables.is_empty() {
            return Err(ConstraintOperationError::EmptyScope);
        }

        let mut seen: HashSet<&Var> = HashSet::default();
        if !self.variables.iter().all(|variable| seen.insert(variable)) {
            return Err(ConstraintOperationError::DuplicateVariable);
        }

        match self.strength {
            AllDifferentStrength::Instantiation => AllDifferentInstantiationArgs {
                vars: self.variables,
            }
            .post(solver),
            AllDifferentStrength::Bounds => AllDifferentBoundsArgs {
                vars: self.variables,
            }
            .post(solver),
        }
    }
}
