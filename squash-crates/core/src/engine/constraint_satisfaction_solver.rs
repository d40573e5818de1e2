//! Houses the solver which attempts to find a solution to a Constraint Satisfaction Problem (CSP)
//! using depth-first search interleaved with propagation.
use std::fmt::Debug;
use std::fmt::Formatter;
use std::time::Instant;

use log::debug;
use log::trace;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::solver_statistics::Measures;
use super::termination::TerminationCondition;
use super::variable_names::VariableNames;
use super::variables::DomainId;
use super::variables::GraphId;
use super::variables::IntegerVariable;
use super::variables::SetId;
use super::variables::VariableId;
use super::Assignments;
use super::EmptyDomain;
use super::PropagationEngine;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::Checkpoint;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Random;
use crate::basic_types::SolutionReference;
use crate::branching::Branch;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::propagation::Entailment;
use crate::propagation::PropagationContext;
use crate::propagation::PropagatorConstructor;
use crate::squash_assert_moderate;
use crate::squash_assert_simple;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::Solver;

/// A solver which attempts to find a solution to a Constraint Satisfaction Problem (CSP) using a
/// depth-first search over [`Branch`]es, performing propagation to a fixpoint after every
/// decision.
///
/// The search is a state machine (see [`SearchState`]); after reporting a solution the search can
/// be resumed to find the next one, which is how solution enumeration and branch-and-bound are
/// performed. The state from before the first search can be restored using
/// [`ConstraintSatisfactionSolver::restore_state_at_root`].
///
/// Practical aspects of the search loop are discussed in \[1\] and \[2\].
///
/// # Bibliography
/// \[1\] C. Schulte and P. J. Stuckey, ‘Efficient constraint propagation engines’, ACM
/// Transactions on Programming Languages and Systems (TOPLAS), vol. 31, no. 1, pp. 1–43, 2008.
///
/// \[2\] F. Rossi, P. Van Beek, and T. Walsh, ‘Constraint programming’, Foundations of Artificial
/// Intelligence, vol. 3, pp. 181–211, 2008.
#[derive(Debug)]
pub struct ConstraintSatisfactionSolver {
    /// The state of the search loop; a search which is interrupted continues from this state.
    state: SearchState,
    /// The domains of all variables, together with the trail which records their changes.
    pub(crate) assignments: Assignments,
    /// Stores the propagators and drives them to a fixpoint.
    engine: PropagationEngine,
    /// One entry per open branch, the deepest branch last.
    search_stack: Vec<SearchLevel>,
    /// The alternative to apply in the next [`SearchState::Propagate`].
    pending_decision: Option<Decision>,
    /// The checkpoint taken at the start of the search; [`None`] if no search is in progress.
    root_checkpoint: Option<Checkpoint>,
    /// The bound imposed by branch-and-bound, re-posted at every propagation.
    objective_cut: Option<Predicate>,
    /// Whether a contradiction was detected at the root while building the model.
    is_infeasible: bool,
    /// A set of counters updated during the search.
    measures: Measures,
    /// Miscellaneous constant parameters used by the solver.
    internal_parameters: SolverOptions,
    /// The names of the variables in the solver.
    variable_names: VariableNames,
}

/// The states of the search loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SearchState {
    /// Ask the brancher for the next branch.
    #[default]
    Select,
    /// Open the branch which was selected.
    Decide,
    /// Apply the pending alternative and run the propagation engine.
    Propagate,
    /// Undo the deepest alternative and move to the next one.
    Backtrack,
    /// All variables are instantiated without contradiction.
    Solution,
    /// The search space is exhausted.
    Done,
}

/// An open branch of the search tree.
#[derive(Clone, Debug)]
struct SearchLevel {
    /// The state of the trail before any alternative of the branch was applied.
    checkpoint: Checkpoint,
    branch: Branch,
    /// The index of the alternative to try after the current one fails.
    next_alternative: usize,
}

/// Options for the [`Solver`] which determine how it behaves.
pub struct SolverOptions {
    /// A random number generator which is used by the [`Solver`] to determine randomised values.
    pub random_generator: SmallRng,
}

impl Debug for SolverOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverOptions").finish()
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            random_generator: SmallRng::seed_from_u64(42),
        }
    }
}

impl SolverOptions {
    /// Options which seed the random generator with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        SolverOptions {
            random_generator: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for ConstraintSatisfactionSolver {
    fn default() -> Self {
        ConstraintSatisfactionSolver::new(SolverOptions::default())
    }
}

impl ConstraintSatisfactionSolver {
    pub fn new(solver_options: SolverOptions) -> Self {
        ConstraintSatisfactionSolver {
            state: SearchState::default(),
            assignments: Assignments::default(),
            engine: PropagationEngine::default(),
            search_stack: vec![],
            pending_decision: None,
            root_checkpoint: None,
            objective_cut: None,
            is_infeasible: false,
            measures: Measures::default(),
            internal_parameters: solver_options,
            variable_names: VariableNames::default(),
        }
    }

    /// Runs the search until it finds a solution, exhausts the search space or is stopped by the
    /// `termination` condition.
    ///
    /// If a search is already in progress (i.e. [`Self::restore_state_at_root`] has not been
    /// called since the previous call), the search resumes where it stopped; after a solution this
    /// means that the next solution is searched for.
    pub fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        if self.is_infeasible {
            return CSPSolverExecutionFlag::Infeasible;
        }

        let start_time = Instant::now();

        self.initialise();
        let result = self.solve_internal(termination, brancher);

        self.measures.time_spent_in_solver_ms += start_time.elapsed().as_millis() as u64;

        result
    }

    /// Undoes every change made by the search, returning the domains to the state in which the
    /// model was built. Also removes the objective cut.
    pub fn restore_state_at_root(&mut self, brancher: &mut impl Brancher) {
        if let Some(root_checkpoint) = self.root_checkpoint.take() {
            self.assignments.undo_to(root_checkpoint);
            self.engine.notify_backtrack();
            brancher.on_backtrack();
        }

        self.search_stack.clear();
        self.pending_decision = None;
        self.objective_cut = None;
        self.state = SearchState::Select;
    }

    /// Imposes `cut` at every node of the remaining search; a cut that is violated by the current
    /// node only takes effect once the search continues.
    pub(crate) fn set_objective_cut(&mut self, cut: Predicate) {
        self.objective_cut = Some(cut);
    }

    pub fn get_solution_reference(&self) -> SolutionReference<'_> {
        SolutionReference::new(&self.assignments)
    }

    pub fn get_random_generator(&mut self) -> &mut impl Random {
        &mut self.internal_parameters.random_generator
    }

    /// Whether the model has been found infeasible while it was built.
    pub fn is_infeasible(&self) -> bool {
        self.is_infeasible
    }

    pub fn measures(&self) -> Measures {
        self.measures
    }

    pub fn log_statistics(&self) {
        // Checked first to avoid going through all the propagators unnecessarily
        if should_log_statistics() {
            self.measures.log(StatisticLogger::default());
            self.engine
                .log_statistics(StatisticLogger::new(["engine"]));
        }
    }

    pub fn get_lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.lower_bound(&self.assignments)
    }

    pub fn get_upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.upper_bound(&self.assignments)
    }

    pub fn integer_variable_contains(&self, variable: &impl IntegerVariable, value: i32) -> bool {
        variable.contains(&self.assignments, value)
    }

    pub fn get_assigned_integer_value(&self, variable: &impl IntegerVariable) -> Option<i32> {
        variable
            .is_fixed(&self.assignments)
            .then(|| variable.lower_bound(&self.assignments))
    }

    pub(crate) fn get_name(&self, variable: impl Into<VariableId>) -> Option<&str> {
        self.variable_names.get_name(variable)
    }

    pub(crate) fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.get_variable_by_name(name)
    }
}

// methods for building the model
impl ConstraintSatisfactionSolver {
    pub fn create_new_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> Result<DomainId, ConstraintOperationError> {
        if lower_bound > upper_bound {
            return Err(ConstraintOperationError::InvalidBounds {
                lower_bound,
                upper_bound,
            });
        }
        self.assert_at_root();

        let domain_id = self.assignments.grow_bounded(lower_bound, upper_bound);
        self.add_name(domain_id, name);
        Ok(domain_id)
    }

    pub fn create_new_enumerated_integer(
        &mut self,
        values: &[i32],
        name: Option<String>,
    ) -> Result<DomainId, ConstraintOperationError> {
        if values.is_empty() {
            return Err(ConstraintOperationError::EmptyValueList);
        }
        self.assert_at_root();

        let mut values = values.to_vec();
        values.sort_unstable();
        values.dedup();

        let domain_id = self.assignments.grow_enumerated(&values);
        self.add_name(domain_id, name);
        Ok(domain_id)
    }

    pub fn create_new_set(
        &mut self,
        universe: &[i32],
        name: Option<String>,
    ) -> Result<SetId, ConstraintOperationError> {
        self.assert_at_root();

        let mut universe = universe.to_vec();
        universe.sort_unstable();
        universe.dedup();

        let set_id = self.assignments.grow_set(universe);
        self.add_name(set_id, name);
        Ok(set_id)
    }

    /// Creates a graph variable over `num_nodes` nodes whose envelope contains the given arcs.
    pub fn create_new_graph(
        &mut self,
        num_nodes: u32,
        arcs: &[(u32, u32)],
        name: Option<String>,
    ) -> Result<GraphId, ConstraintOperationError> {
        if let Some(&(from, to)) = arcs
            .iter()
            .find(|&&(from, to)| from >= num_nodes || to >= num_nodes)
        {
            return Err(ConstraintOperationError::NodeOutOfRange {
                node: from.max(to),
                num_nodes,
            });
        }
        self.assert_at_root();

        let graph_id = self.assignments.grow_graph(num_nodes, arcs.iter().copied());
        self.add_name(graph_id, name);
        Ok(graph_id)
    }

    /// Posts the propagator created by `constructor` and propagates to a fixpoint.
    ///
    /// Once adding a propagator has led to a contradiction the solver is infeasible; every
    /// subsequent call reports [`ConstraintOperationError::InfeasibleState`].
    pub fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<(), ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        if self.is_infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        self.assert_at_root();

        match self.engine.add_propagator(constructor, &mut self.assignments) {
            Ok(_) => Ok(()),
            Err(contradiction) => {
                debug!("The model is infeasible at the root: {contradiction}");
                self.is_infeasible = true;
                Err(ConstraintOperationError::InfeasiblePropagator)
            }
        }
    }

    /// Applies the predicate at the root and propagates.
    pub fn post_predicate(&mut self, predicate: Predicate) -> Result<(), ConstraintOperationError> {
        self.narrow_at_root(|assignments| assignments.post_predicate(predicate))
    }

    /// Adds the node to the kernel of the graph at the root and propagates.
    pub fn add_node_to_kernel(
        &mut self,
        graph: GraphId,
        node: u32,
    ) -> Result<(), ConstraintOperationError> {
        let num_nodes = self.assignments.graph_num_nodes(graph);
        if node >= num_nodes {
            return Err(ConstraintOperationError::NodeOutOfRange { node, num_nodes });
        }

        self.narrow_at_root(|assignments| assignments.add_node_to_kernel(graph, node))
    }

    fn narrow_at_root(
        &mut self,
        narrowing: impl FnOnce(&mut Assignments) -> Result<bool, EmptyDomain>,
    ) -> Result<(), ConstraintOperationError> {
        if self.is_infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }
        self.assert_at_root();

        let result = narrowing(&mut self.assignments)
            .map_err(Into::into)
            .and_then(|_| self.engine.propagate(&mut self.assignments));

        if let Err(contradiction) = result {
            debug!("Narrowing a domain at the root led to a contradiction: {contradiction}");
            self.assignments.discard_domain_events();
            self.is_infeasible = true;
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(())
    }

    fn add_name(&mut self, variable: impl Into<VariableId>, name: Option<String>) {
        if let Some(name) = name {
            self.variable_names.add(variable, name);
        }
    }

    fn assert_at_root(&self) {
        squash_assert_simple!(
            self.root_checkpoint.is_none(),
            "The model can only be changed when no search is in progress"
        );
    }
}

// methods that serve as the main building blocks
impl ConstraintSatisfactionSolver {
    fn initialise(&mut self) {
        if self.root_checkpoint.is_none() {
            self.root_checkpoint = Some(self.assignments.checkpoint());
            self.state = SearchState::Propagate;
        }
    }

    fn solve_internal(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) -> CSPSolverExecutionFlag {
        loop {
            match self.state {
                SearchState::Select => {
                    if termination.should_stop() {
                        return CSPSolverExecutionFlag::Timeout;
                    }

                    self.select(brancher);
                }
                SearchState::Decide => self.decide(),
                SearchState::Propagate => self.propagate(termination),
                SearchState::Backtrack => {
                    if termination.should_stop() {
                        return CSPSolverExecutionFlag::Timeout;
                    }

                    self.backtrack(brancher);
                }
                SearchState::Solution => {
                    self.report_solution(termination, brancher);
                    return CSPSolverExecutionFlag::Feasible;
                }
                SearchState::Done => return CSPSolverExecutionFlag::Infeasible,
            }
        }
    }

    fn select(&mut self, brancher: &mut impl Brancher) {
        let context = &mut SelectionContext::new(
            &self.assignments,
            &mut self.internal_parameters.random_generator,
        );

        match brancher.next_branch(context) {
            Some(branch) => {
                self.search_stack.push(SearchLevel {
                    checkpoint: self.assignments.checkpoint(),
                    branch,
                    next_alternative: 0,
                });
                self.state = SearchState::Decide;
            }
            None => self.state = SearchState::Solution,
        }
    }

    fn decide(&mut self) {
        self.measures.peak_depth = self.measures.peak_depth.max(self.search_stack.len() as u64);
        self.pending_decision = self.search_stack.last_mut().and_then(next_alternative);
        self.state = SearchState::Propagate;
    }

    fn propagate(&mut self, termination: &mut impl TerminationCondition) {
        let mut result = Ok(());

        if let Some(decision) = self.pending_decision.take() {
            trace!("Decision {decision} at depth {}", self.search_stack.len());
            self.measures.num_nodes += 1;
            termination.decision_has_been_made();

            result = decision.apply(&mut self.assignments).map(|_| ());
        }

        let result = result
            .and_then(|_| match self.objective_cut {
                Some(cut) => self.assignments.post_predicate(cut).map(|_| ()),
                None => Ok(()),
            })
            .map_err(Into::into)
            .and_then(|_| self.engine.propagate(&mut self.assignments));

        match result {
            Ok(()) => self.state = SearchState::Select,
            Err(contradiction) => {
                trace!("Contradiction: {contradiction}");
                self.measures.num_fails += 1;
                termination.conflict_has_occurred();
                self.state = SearchState::Backtrack;
            }
        }
    }

    fn backtrack(&mut self, brancher: &mut impl Brancher) {
        self.measures.num_backtracks += 1;

        while let Some(level) = self.search_stack.last_mut() {
            self.assignments.undo_to(level.checkpoint);
            self.engine.notify_backtrack();
            brancher.on_backtrack();

            if let Some(decision) = next_alternative(level) {
                trace!("Backtracking to depth {}", self.search_stack.len());
                self.pending_decision = Some(decision);
                self.state = SearchState::Propagate;
                return;
            }

            let _ = self.search_stack.pop();
        }

        debug!("The search space has been exhausted");
        self.state = SearchState::Done;
    }

    fn report_solution(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
    ) {
        squash_assert_moderate!(
            self.engine.iter_propagators().all(|propagator| propagator
                .is_entailed(PropagationContext::new(&self.assignments))
                != Entailment::False),
            "A propagator is violated by the solution"
        );

        self.measures.num_solutions += 1;
        termination.solution_has_been_found();
        brancher.on_solution(SolutionReference::new(&self.assignments));

        // The search continues below the solution with the next alternative.
        self.state = SearchState::Backtrack;
    }
}

/// Takes the next alternative of the level, if any remains.
fn next_alternative(level: &mut SearchLevel) -> Option<Decision> {
    let decision = level.branch.get(level.next_alternative)?;
    level.next_alternative += 1;
    Some(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::branchers::IndependentVariableValueBrancher;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::engine::termination::indefinite::Indefinite;
    use crate::engine::termination::node_budget::NodeBudget;
    use crate::predicate;
    use crate::propagators::all_different::AllDifferentInstantiationArgs;

    fn input_order_brancher(
        variables: &[DomainId],
    ) -> IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMin> {
        IndependentVariableValueBrancher::new(InputOrder::new(variables), InDomainMin)
    }

    fn solution_values(solver: &ConstraintSatisfactionSolver, variables: &[DomainId]) -> Vec<i32> {
        variables
            .iter()
            .map(|variable| solver.get_lower_bound(variable))
            .collect()
    }

    #[test]
    fn resuming_enumerates_all_solutions_in_order() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_bounded_integer(0, 1, None).unwrap();
        let y = solver.create_new_enumerated_integer(&[3, 5], None).unwrap();
        let mut brancher = input_order_brancher(&[x, y]);

        let mut solutions = vec![];
        while solver.solve(&mut Indefinite, &mut brancher) == CSPSolverExecutionFlag::Feasible {
            solutions.push(solution_values(&solver, &[x, y]));
        }

        assert_eq!(
            vec![vec![0, 3], vec![0, 5], vec![1, 3], vec![1, 5]],
            solutions
        );
        assert_eq!(4, solver.measures().num_solutions);
    }

    #[test]
    fn a_problem_without_variables_has_exactly_one_solution() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let mut brancher = input_order_brancher(&[]);

        assert_eq!(
            CSPSolverExecutionFlag::Feasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );
        assert_eq!(
            CSPSolverExecutionFlag::Infeasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );
    }

    #[test]
    fn restoring_the_root_undoes_the_search() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_bounded_integer(0, 5, None).unwrap();
        let mut brancher = input_order_brancher(&[x]);

        let _ = solver.solve(&mut Indefinite, &mut brancher);
        assert_eq!(0, solver.get_upper_bound(&x));

        solver.restore_state_at_root(&mut brancher);
        assert_eq!(5, solver.get_upper_bound(&x));
        assert_eq!(
            CSPSolverExecutionFlag::Feasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );
        assert_eq!(0, solver.get_upper_bound(&x));
    }

    #[test]
    fn objective_cut_prunes_the_remaining_search() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_bounded_integer(0, 9, None).unwrap();
        let mut brancher = input_order_brancher(&[x]);

        assert_eq!(
            CSPSolverExecutionFlag::Feasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );
        solver.set_objective_cut(predicate!(x >= 7));

        assert_eq!(
            CSPSolverExecutionFlag::Feasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );
        assert_eq!(7, solver.get_lower_bound(&x));
    }

    #[test]
    fn stopped_search_can_be_resumed() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let variables = (0..3)
            .map(|_| solver.create_new_bounded_integer(0, 1, None).unwrap())
            .collect::<Vec<_>>();
        let mut brancher = input_order_brancher(&variables);

        let mut budget = NodeBudget::new(1);
        assert_eq!(
            CSPSolverExecutionFlag::Timeout,
            solver.solve(&mut budget, &mut brancher)
        );
        assert_eq!(1, solver.measures().num_nodes);

        assert_eq!(
            CSPSolverExecutionFlag::Feasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );
        assert_eq!(vec![0, 0, 0], solution_values(&solver, &variables));
    }

    #[test]
    fn every_failure_is_undone_by_one_backtrack() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let variables = (0..3)
            .map(|_| solver.create_new_bounded_integer(0, 1, None).unwrap())
            .collect::<Vec<_>>();
        solver
            .add_propagator(AllDifferentInstantiationArgs {
                vars: variables.clone().into(),
            })
            .unwrap();
        let num_root_entries = solver.assignments.num_trail_entries();
        let mut brancher = input_order_brancher(&variables);

        // Both values of the first variable force the other two to the same value
        assert_eq!(
            CSPSolverExecutionFlag::Infeasible,
            solver.solve(&mut Indefinite, &mut brancher)
        );

        let measures = solver.measures();
        assert_eq!(2, measures.num_fails);
        assert_eq!(2, measures.num_backtracks);
        assert_eq!(num_root_entries, solver.assignments.num_trail_entries());
    }

    #[test]
    fn variable_creation_validates_its_arguments() {
        let mut solver = ConstraintSatisfactionSolver::default();

        assert_eq!(
            Err(ConstraintOperationError::InvalidBounds {
                lower_bound: 3,
                upper_bound: 2
            }),
            solver.create_new_bounded_integer(3, 2, None)
        );
        assert_eq!(
            Err(ConstraintOperationError::EmptyValueList),
            solver.create_new_enumerated_integer(&[], None)
        );
        assert_eq!(
            Err(ConstraintOperationError::NodeOutOfRange {
                node: 4,
                num_nodes: 3
            }),
            solver.create_new_graph(3, &[(0, 1), (1, 4)], None)
        );
    }

    #[test]
    fn nodes_outside_the_graph_cannot_enter_the_kernel() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let graph = solver
            .create_new_graph(2, &[(0, 1)], None)
            .expect("valid graph");

        assert_eq!(
            Err(ConstraintOperationError::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            }),
            solver.add_node_to_kernel(graph, 2)
        );
        assert!(!solver.is_infeasible());
        assert_eq!(Ok(()), solver.add_node_to_kernel(graph, 1));
    }

    #[test]
    fn named_variables_can_be_looked_up() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver
            .create_new_bounded_integer(0, 1, Some("x".to_owned()))
            .unwrap();

        assert_eq!(Some("x"), solver.get_name(x));
        assert_eq!(Some(VariableId::Integer(x)), solver.get_variable_by_name("x"));
    }

    #[test]
    fn failing_root_predicate_makes_the_solver_infeasible() {
        let mut solver = ConstraintSatisfactionSolver::default();
        let x = solver.create_new_bounded_integer(0, 1, None).unwrap();

        assert_eq!(
            Err(ConstraintOperationError::InfeasiblePropagator),
            solver.post_predicate(predicate!(x >= 2))
        );
        assert_eq!(
            Err(ConstraintOperationError::InfeasibleState),
            solver.post_predicate(predicate!(x >= 1))
        );
        assert!(solver.is_infeasible());
    }
}
