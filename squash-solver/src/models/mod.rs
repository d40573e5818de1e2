//! The sample models which can be solved by the `squash-solver` binary.
//!
//! Every model is built into a [`Solver`] by [`Model::build`], which returns a [`ModelInstance`]
//! describing how the solutions of the model are printed, which search strategy suits the model
//! and, optionally, which variable can serve as an objective.
use std::fmt::Display;

use clap::ValueEnum;
use squash_core::branching::branchers::DynamicBrancher;
use squash_core::constraints::AllDifferentStrength;
use squash_core::results::ProblemSolution;
use squash_core::variables::DomainId;
use squash_core::variables::GraphId;
use squash_core::ConstraintOperationError;
use squash_core::Solver;

mod big_leq;
mod hamiltonian_path;
mod queens;

pub use big_leq::big_leq;
pub use hamiltonian_path::hamiltonian_path;
pub use queens::queens;

/// The models which are built into the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    /// `size` variables over `[0, size - 1]` which are pairwise different and non-decreasing;
    /// the only solution is `[0, 1, ..., size - 1]`.
    BigLeq,
    /// Place `size` queens on a `size` by `size` board such that no two queens attack each other.
    Queens,
    /// Find a path through a graph of `size` nodes which starts at the first node, ends at the
    /// last node and visits every node exactly once.
    HamiltonianPath,
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::BigLeq => write!(f, "big-leq"),
            Model::Queens => write!(f, "queens"),
            Model::HamiltonianPath => write!(f, "hamiltonian-path"),
        }
    }
}

/// The parameters of a model.
#[derive(Debug, Clone, Copy)]
pub struct ModelOptions {
    pub size: u32,
    pub all_different_strength: AllDifferentStrength,
}

impl Model {
    /// Adds the variables and constraints of the model to the `solver`.
    pub fn build(
        self,
        solver: &mut Solver,
        options: ModelOptions,
    ) -> Result<ModelInstance, ConstraintOperationError> {
        match self {
            Model::BigLeq => big_leq(solver, options.size, options.all_different_strength),
            Model::Queens => queens(solver, options.size, options.all_different_strength),
            Model::HamiltonianPath => hamiltonian_path(solver, options.size),
        }
    }
}

/// A model which has been added to a [`Solver`].
#[derive(Debug)]
pub struct ModelInstance {
    /// The values which are printed for every solution.
    pub outputs: Vec<Output>,
    /// The search strategy which is used when free search is not enabled.
    pub search: DynamicBrancher,
    /// The variable which is optimised when optimisation is requested.
    pub objective: Option<DomainId>,
}

/// Describes how (part of) a solution is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// An array of integer variables, printed as `name = [v1, v2, ...];`.
    Integers {
        name: String,
        variables: Vec<DomainId>,
    },
    /// A path in a graph variable, printed as the nodes in the order they are visited starting
    /// from `source`.
    Path {
        name: String,
        graph: GraphId,
        source: u32,
    },
}

impl Output {
    /// Formats the value of this output in the provided solution.
    pub fn format(&self, solution: &impl ProblemSolution) -> String {
        match self {
            Output::Integers { name, variables } => {
                let values = variables
                    .iter()
                    .map(|&variable| solution.get_integer_value(variable).to_string())
                    .collect::<Vec<_>>();
                format!("{name} = [{}];", values.join(", "))
            }
            Output::Path {
                name,
                graph,
                source,
            } => {
                let arcs = solution.get_graph_arcs(*graph);

                let mut nodes = vec![*source];
                let mut current = *source;
                // Bounded by the number of arcs in case the arcs do not form a simple path
                for _ in 0..arcs.len() {
                    match arcs.iter().find(|&&(from, _)| from == current) {
                        Some(&(_, next)) => {
                            nodes.push(next);
                            current = next;
                        }
                        None => break,
                    }
                }

                let nodes = nodes.iter().map(u32::to_string).collect::<Vec<_>>();
                format!("{name} = [{}];", nodes.join(", "))
            }
        }
    }
}
