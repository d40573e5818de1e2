//! Contains the structures corresponding to solution iterations.

use super::SolutionReference;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::branching::Brancher;
use crate::engine::ConstraintSatisfactionSolver;
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// A struct which allows the retrieval of multiple solutions to a satisfaction problem.
///
/// Every call to [`SolutionIterator::next_solution`] resumes the search where the previous
/// solution was reported, so each solution is found exactly once. Once the iteration is finished
/// (or the iterator is dropped) the [`Solver`] is returned to its root state.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'brancher, 'termination, B: Brancher, T> {
    solver: &'solver mut ConstraintSatisfactionSolver,
    brancher: &'brancher mut B,
    termination: &'termination mut T,
    has_solution: bool,
}

impl<'solver, 'brancher, 'termination, B: Brancher, T: TerminationCondition>
    SolutionIterator<'solver, 'brancher, 'termination, B, T>
{
    pub(crate) fn new(
        solver: &'solver mut ConstraintSatisfactionSolver,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> Self {
        SolutionIterator {
            solver,
            brancher,
            termination,
            has_solution: false,
        }
    }

    /// Find the next solution. The [`Brancher::on_solution`] method of the [`Brancher`] is called
    /// by the search for every solution that is found.
    pub fn next_solution(&mut self) -> IteratedSolution<'_> {
        match self.solver.solve(self.termination, self.brancher) {
            CSPSolverExecutionFlag::Feasible => {
                self.has_solution = true;
                IteratedSolution::Solution(self.solver.get_solution_reference())
            }
            CSPSolverExecutionFlag::Infeasible => {
                self.solver.restore_state_at_root(self.brancher);
                if self.has_solution {
                    IteratedSolution::Finished
                } else {
                    IteratedSolution::Unsatisfiable
                }
            }
            // The search stays where it stopped, so calling this again resumes it
            CSPSolverExecutionFlag::Timeout => IteratedSolution::Unknown,
        }
    }
}

impl<B: Brancher, T> Drop for SolutionIterator<'_, '_, '_, B, T> {
    fn drop(&mut self) {
        self.solver.restore_state_at_root(self.brancher);
    }
}

/// Enum which specifies the status of the call to [`SolutionIterator::next_solution`].
#[derive(Debug)]
pub enum IteratedSolution<'solver> {
    /// A new solution was identified.
    Solution(SolutionReference<'solver>),

    /// No more solutions exist.
    Finished,

    /// The solver was terminated during search.
    Unknown,

    /// There exists no solution
    Unsatisfiable,
}
