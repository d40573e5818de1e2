use super::results::OptimisationResult;
use super::results::SatisfactionResult;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Solution;
use crate::branching::branchers::ArcBrancher;
use crate::branching::branchers::ArcSelection;
use crate::branching::branchers::DynamicBrancher;
use crate::branching::branchers::IndependentVariableValueBrancher;
use crate::branching::branchers::SetBrancher;
use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::InDomainRandom;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::MaxDelta;
use crate::branching::variable_selection::MinDelta;
use crate::branching::variable_selection::RandomSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::constraints::ConstraintPoster;
use crate::engine::predicates::Predicate;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::GraphId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::SetId;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::Measures;
use crate::optimisation::branch_and_bound::BranchAndBound;
use crate::optimisation::solution_callback::SolutionCallback;
use crate::optimisation::OptimisationDirection;
use crate::options::SolverOptions;
use crate::propagation::PropagatorConstructor;
use crate::results::solution_iterator::SolutionIterator;
use crate::results::SolutionReference;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::variables::VariableId;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
///
/// # Creating Variables
/// As stated in [`crate::variables`], we can create three types of variables: integer variables,
/// set variables and graph variables.
///
/// ```rust
/// # use squash_core::Solver;
/// # use squash_core::variables::TransformableVariable;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10).expect("valid bounds");
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver
///     .new_named_bounded_integer(0, 10, "x")
///     .expect("valid bounds");
///
/// // We can also create an integer variable with a non-continuous domain in the follow way
/// let enumerated_integer = solver
///     .new_enumerated_integer(&[0, 3, 5])
///     .expect("non-empty domain");
///
/// // Additionally, we can also create an affine view over a variable with both a scale and an offset (or either)
/// let view_over_integer = integer_between_bounds.scaled(-1).offset(15);
///
/// // A set variable ranging over the subsets of {1, 2, 3}
/// let set = solver.new_set(&[1, 2, 3]).expect("valid universe");
///
/// // A graph variable over 4 nodes which may contain any arc between two different nodes
/// let graph = solver.new_graph(4).expect("valid graph");
/// ```
///
/// # Using the Solver
/// Constraints are added with [`Solver::add_constraint`], after which the problem is solved with
/// [`Solver::satisfy`], [`Solver::optimise`] or [`Solver::get_solution_iterator`].
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    pub(crate) satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(solver_options: SolverOptions) -> Self {
        Solver {
            satisfaction_solver: ConstraintSatisfactionSolver::new(solver_options),
        }
    }

    /// Logs the statistics currently present in the solver with the provided objective value.
    pub fn log_statistics_with_objective(&self, objective_value: i64) {
        log_statistic("objective", objective_value);
        self.log_statistics();
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.satisfaction_solver.log_statistics();
        log_statistic_postfix();
    }

    /// The counters of the search performed by this solver so far.
    pub fn measures(&self) -> Measures {
        self.satisfaction_solver.measures()
    }

    /// Whether a contradiction was found while the model was built; every subsequent search
    /// reports that the problem is unsatisfiable.
    pub fn is_infeasible(&self) -> bool {
        self.satisfaction_solver.is_infeasible()
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_lower_bound(variable)
    }

    /// Get the upper-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_upper_bound(variable)
    }

    /// Whether `value` is in the domain of the given [`IntegerVariable`] at the root level (after
    /// propagation).
    pub fn contains(&self, variable: &impl IntegerVariable, value: i32) -> bool {
        self.satisfaction_solver
            .integer_variable_contains(variable, value)
    }

    /// The number of nodes the given graph is defined over.
    pub fn num_nodes(&self, graph: GraphId) -> u32 {
        self.satisfaction_solver.assignments.graph_num_nodes(graph)
    }

    /// The name which was given to the variable when it was created.
    pub fn get_name(&self, variable: impl Into<VariableId>) -> Option<&str> {
        self.satisfaction_solver.get_name(variable)
    }

    /// Looks up a variable by the name it was given when it was created.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.satisfaction_solver.get_variable_by_name(name)
    }
}

/// Functions to create integer, set and graph variables.
impl Solver {
    /// Create a new integer variable with the given bounds.
    ///
    /// # Example
    /// ```rust
    /// # use squash_core::Solver;
    /// # use squash_core::ConstraintOperationError;
    /// let mut solver = Solver::default();
    ///
    /// // We can create an integer variable with a domain in the range [0, 10]
    /// let integer_between_bounds = solver.new_bounded_integer(0, 10);
    /// assert!(integer_between_bounds.is_ok());
    ///
    /// // But the bounds have to describe a non-empty interval
    /// assert_eq!(
    ///     Err(ConstraintOperationError::InvalidBounds {
    ///         lower_bound: 3,
    ///         upper_bound: 2
    ///     }),
    ///     solver.new_bounded_integer(3, 2)
    /// );
    /// ```
    pub fn new_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<DomainId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_bounded_integer(lower_bound, upper_bound, None)
    }

    /// Create a new named integer variable with the given bounds.
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> Result<DomainId, ConstraintOperationError> {
        self.satisfaction_solver.create_new_bounded_integer(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }

    /// Create a new integer variable which has a domain of predefined values. Duplicate values are
    /// ignored.
    ///
    /// # Example
    /// ```rust
    /// # use squash_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let enumerated_integer = solver
    ///     .new_enumerated_integer(&[5, 0, 3, 3])
    ///     .expect("non-empty domain");
    ///
    /// assert_eq!(0, solver.lower_bound(&enumerated_integer));
    /// assert_eq!(5, solver.upper_bound(&enumerated_integer));
    /// assert!(!solver.contains(&enumerated_integer, 4));
    /// ```
    pub fn new_enumerated_integer(
        &mut self,
        values: &[i32],
    ) -> Result<DomainId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_enumerated_integer(values, None)
    }

    /// Create a new named integer variable which has a domain of predefined values.
    pub fn new_named_enumerated_integer(
        &mut self,
        values: &[i32],
        name: impl Into<String>,
    ) -> Result<DomainId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_enumerated_integer(values, Some(name.into()))
    }

    /// Create a new set variable which can be any subset of `universe`.
    pub fn new_set(&mut self, universe: &[i32]) -> Result<SetId, ConstraintOperationError> {
        self.satisfaction_solver.create_new_set(universe, None)
    }

    /// Create a new named set variable which can be any subset of `universe`.
    pub fn new_named_set(
        &mut self,
        universe: &[i32],
        name: impl Into<String>,
    ) -> Result<SetId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_set(universe, Some(name.into()))
    }

    /// Create a new graph variable over the nodes `0..num_nodes` whose envelope contains every
    /// arc between two different nodes.
    pub fn new_graph(&mut self, num_nodes: u32) -> Result<GraphId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_graph(num_nodes, &complete_arcs(num_nodes), None)
    }

    /// Create a new named graph variable over the nodes `0..num_nodes` whose envelope contains
    /// every arc between two different nodes.
    pub fn new_named_graph(
        &mut self,
        num_nodes: u32,
        name: impl Into<String>,
    ) -> Result<GraphId, ConstraintOperationError> {
        self.satisfaction_solver.create_new_graph(
            num_nodes,
            &complete_arcs(num_nodes),
            Some(name.into()),
        )
    }

    /// Create a new graph variable over the nodes `0..num_nodes` whose envelope contains exactly
    /// the provided arcs.
    pub fn new_graph_with_arcs(
        &mut self,
        num_nodes: u32,
        arcs: &[(u32, u32)],
    ) -> Result<GraphId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_graph(num_nodes, arcs, None)
    }

    /// Create a new named graph variable over the nodes `0..num_nodes` whose envelope contains
    /// exactly the provided arcs.
    pub fn new_named_graph_with_arcs(
        &mut self,
        num_nodes: u32,
        arcs: &[(u32, u32)],
        name: impl Into<String>,
    ) -> Result<GraphId, ConstraintOperationError> {
        self.satisfaction_solver
            .create_new_graph(num_nodes, arcs, Some(name.into()))
    }
}

fn complete_arcs(num_nodes: u32) -> Vec<(u32, u32)> {
    (0..num_nodes)
        .flat_map(|from| {
            (0..num_nodes)
                .filter(move |&to| to != from)
                .map(move |to| (from, to))
        })
        .collect()
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Solves the current model in the [`Solver`] until it finds a solution (or is indicated to
    /// terminate by the provided [`TerminationCondition`]) and returns a [`SatisfactionResult`]
    /// which can be used to obtain the found solution.
    ///
    /// The solver is returned to its root state afterwards, so variables and constraints can be
    /// added before solving again.
    pub fn satisfy<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        let result = match self.satisfaction_solver.solve(termination, brancher) {
            CSPSolverExecutionFlag::Feasible => {
                let solution: Solution = self.satisfaction_solver.get_solution_reference().into();
                SatisfactionResult::Satisfiable(solution)
            }
            CSPSolverExecutionFlag::Infeasible => SatisfactionResult::Unsatisfiable,
            CSPSolverExecutionFlag::Timeout => SatisfactionResult::Unknown,
        };

        // Reset the state whenever we return a result
        self.satisfaction_solver.restore_state_at_root(brancher);

        result
    }

    /// Creates a [`SolutionIterator`] which enumerates the solutions of the current model one by
    /// one.
    ///
    /// # Example
    /// ```rust
    /// # use squash_core::Solver;
    /// # use squash_core::results::solution_iterator::IteratedSolution;
    /// # use squash_core::termination::Indefinite;
    /// let mut solver = Solver::default();
    /// let _ = solver.new_bounded_integer(0, 2).expect("valid bounds");
    ///
    /// let mut brancher = solver.default_brancher();
    /// let mut termination = Indefinite;
    /// let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);
    ///
    /// let mut num_solutions = 0;
    /// while let IteratedSolution::Solution(_) = iterator.next_solution() {
    ///     num_solutions += 1;
    /// }
    ///
    /// assert_eq!(3, num_solutions);
    /// ```
    pub fn get_solution_iterator<
        'this,
        'brancher,
        'termination,
        B: Brancher,
        T: TerminationCondition,
    >(
        &'this mut self,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> SolutionIterator<'this, 'brancher, 'termination, B, T> {
        SolutionIterator::new(&mut self.satisfaction_solver, brancher, termination)
    }

    /// Optimises `objective` in the given `direction` with branch-and-bound.
    ///
    /// Every solution that is found is passed to `on_solution`, after which the remainder of the
    /// search only accepts solutions which strictly improve upon it. It returns an
    /// [`OptimisationResult`] which can be used to retrieve the best solution if it exists.
    ///
    /// # Example
    /// ```rust
    /// # use squash_core::constraints;
    /// # use squash_core::optimisation::OptimisationDirection;
    /// # use squash_core::results::OptimisationResult;
    /// # use squash_core::results::ProblemSolution;
    /// # use squash_core::results::SolutionReference;
    /// # use squash_core::termination::Indefinite;
    /// # use squash_core::DefaultBrancher;
    /// # use squash_core::Solver;
    /// let mut solver = Solver::default();
    /// let x = solver.new_bounded_integer(0, 5).expect("valid bounds");
    /// let y = solver.new_bounded_integer(3, 5).expect("valid bounds");
    ///
    /// // x + y <= 7
    /// solver
    ///     .add_constraint(constraints::less_than_or_equals([x, y], 7))
    ///     .post()
    ///     .expect("satisfiable");
    ///
    /// let mut brancher = solver.default_brancher();
    /// let result = solver.optimise(
    ///     &mut brancher,
    ///     &mut Indefinite,
    ///     OptimisationDirection::Maximise,
    ///     x,
    ///     |_: &Solver, _: SolutionReference, _: &DefaultBrancher| {},
    /// );
    ///
    /// match result {
    ///     OptimisationResult::Optimal(solution) => assert_eq!(4, solution.get_integer_value(x)),
    ///     _ => panic!("the problem has an optimal solution"),
    /// }
    /// ```
    pub fn optimise<B, Var, Callback>(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        direction: OptimisationDirection,
        objective: Var,
        on_solution: Callback,
    ) -> OptimisationResult
    where
        B: Brancher,
        Var: IntegerVariable,
        Callback: SolutionCallback<B>,
    {
        BranchAndBound::new(direction, objective, on_solution).optimise(brancher, termination, self)
    }

    /// Returns the solution which the search is currently at. Only meaningful from within a
    /// solution callback.
    pub fn get_solution_reference(&self) -> SolutionReference<'_> {
        self.satisfaction_solver.get_solution_reference()
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`] which adds the
    /// constraint through [`ConstraintPoster::post`].
    ///
    /// If the constraint is never posted, it _is not_ actually added to the solver. In this case,
    /// a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use squash_core::constraints;
    /// # use squash_core::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3).expect("valid bounds");
    /// let b = solver.new_bounded_integer(0, 3).expect("valid bounds");
    ///
    /// solver
    ///     .add_constraint(constraints::equals([a, b], 0))
    ///     .post()
    ///     .expect("satisfiable");
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    /// Applies the [`Predicate`] at the root and propagates.
    ///
    /// If this leads to a contradiction, a [`ConstraintOperationError`] is returned and the solver
    /// is infeasible from then on.
    pub fn post_predicate(&mut self, predicate: Predicate) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.post_predicate(predicate)
    }

    /// Post a new propagator to the solver. If unsatisfiability can be immediately determined
    /// through propagation, this will return a [`ConstraintOperationError`].
    ///
    /// If the solver is already in a conflicting state, i.e. a previous call to this method
    /// already returned an error, calling this again will not alter the solver in any way, and
    /// [`ConstraintOperationError::InfeasibleState`] will be returned.
    pub(crate) fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<(), ConstraintOperationError>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        self.satisfaction_solver.add_propagator(constructor)
    }

    pub(crate) fn add_node_to_kernel(
        &mut self,
        graph: GraphId,
        node: u32,
    ) -> Result<(), ConstraintOperationError> {
        self.satisfaction_solver.add_node_to_kernel(graph, node)
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates a [`DefaultBrancher`] which first branches over all integer variables using
    /// [`FirstFail`] as [`VariableSelector`] and [`InDomainMin`] as [`ValueSelector`], then over
    /// all set variables using [`MinDelta`] and finally over every graph variable with an
    /// [`ArcBrancher`] in [`ArcSelection::Lexicographic`] order.
    pub fn default_brancher(&self) -> DefaultBrancher {
        let assignments = &self.satisfaction_solver.assignments;
        let mut branchers: Vec<Box<dyn Brancher>> = vec![];

        let domains = assignments.get_domains().collect::<Vec<_>>();
        if !domains.is_empty() {
            branchers.push(Box::new(IndependentVariableValueBrancher::new(
                FirstFail::new(&domains),
                InDomainMin,
            )));
        }

        let sets = assignments.get_sets().collect::<Vec<_>>();
        if !sets.is_empty() {
            branchers.push(Box::new(SetBrancher::new(MinDelta::new(&sets))));
        }

        branchers.extend(assignments.get_graphs().map(|graph| {
            Box::new(ArcBrancher::new(graph, ArcSelection::Lexicographic)) as Box<dyn Brancher>
        }));

        DynamicBrancher::new(branchers)
    }

    /// Creates a [`DefaultBrancher`] over the same variables as [`Solver::default_brancher`], but
    /// which selects integer variables and values at random (using the random generator of the
    /// [`SolverOptions`]), prefers the set with the largest envelope and picks random arcs.
    ///
    /// Differently seeded solvers using this brancher explore the search space in different
    /// orders.
    pub fn random_brancher(&self) -> DefaultBrancher {
        let assignments = &self.satisfaction_solver.assignments;
        let mut branchers: Vec<Box<dyn Brancher>> = vec![];

        let domains = assignments.get_domains().collect::<Vec<_>>();
        if !domains.is_empty() {
            branchers.push(Box::new(IndependentVariableValueBrancher::new(
                RandomSelector::new(&domains),
                InDomainRandom,
            )));
        }

        let sets = assignments.get_sets().collect::<Vec<_>>();
        if !sets.is_empty() {
            branchers.push(Box::new(SetBrancher::new(MaxDelta::new(&sets))));
        }

        branchers.extend(assignments.get_graphs().map(|graph| {
            Box::new(ArcBrancher::new(graph, ArcSelection::Random)) as Box<dyn Brancher>
        }));

        DynamicBrancher::new(branchers)
    }
}

/// The type of [`Brancher`] which is created by [`Solver::default_brancher`].
pub type DefaultBrancher = DynamicBrancher;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::results::solution_iterator::IteratedSolution;
    use crate::results::ProblemSolution;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;

    #[test]
    fn complete_graph_has_no_self_loops() {
        assert_eq!(
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)],
            complete_arcs(3)
        );
    }

    #[test]
    fn satisfy_restores_the_root_state() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10).expect("valid bounds");

        let mut brancher = solver.default_brancher();
        match solver.satisfy(&mut brancher, &mut Indefinite) {
            SatisfactionResult::Satisfiable(solution) => {
                assert_eq!(0, solution.get_integer_value(x))
            }
            result => panic!("expected a solution, got {result:?}"),
        }

        assert_eq!(0, solver.lower_bound(&x));
        assert_eq!(10, solver.upper_bound(&x));
    }

    #[test]
    fn infeasible_model_is_unsatisfiable() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 1).expect("valid bounds");
        let y = solver.new_bounded_integer(0, 1).expect("valid bounds");
        let z = solver.new_bounded_integer(0, 1).expect("valid bounds");

        solver
            .add_constraint(constraints::all_different(
                [x, y, z],
                constraints::AllDifferentStrength::Instantiation,
            ))
            .post()
            .expect("no contradiction at the root");

        let mut brancher = solver.default_brancher();
        assert!(matches!(
            solver.satisfy(&mut brancher, &mut Indefinite),
            SatisfactionResult::Unsatisfiable
        ));
    }

    #[test]
    fn exhausted_budget_is_unknown() {
        let mut solver = Solver::default();
        let _ = solver.new_bounded_integer(0, 10).expect("valid bounds");

        let mut brancher = solver.default_brancher();
        assert!(matches!(
            solver.satisfy(&mut brancher, &mut NodeBudget::new(0)),
            SatisfactionResult::Unknown
        ));
    }

    #[test]
    fn iterator_counts_the_solutions_of_a_set() {
        let mut solver = Solver::default();
        let set = solver.new_set(&[1, 2, 3]).expect("valid universe");

        let mut brancher = solver.default_brancher();
        let mut termination = Indefinite;
        let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

        let mut solutions = vec![];
        loop {
            match iterator.next_solution() {
                IteratedSolution::Solution(solution) => {
                    let mut value = solution.get_set_value(set);
                    value.sort_unstable();
                    solutions.push(value);
                }
                IteratedSolution::Finished => break,
                result => panic!("unexpected outcome {result:?}"),
            }
        }

        assert_eq!(8, solutions.len());
        solutions.sort();
        solutions.dedup();
        assert_eq!(8, solutions.len());
    }

    #[test]
    fn iterator_over_an_infeasible_model() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 0).expect("valid bounds");
        let _ = solver.add_constraint(constraints::not_equals(x, 0)).post();

        let mut brancher = solver.default_brancher();
        let mut termination = Indefinite;
        let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

        assert!(matches!(
            iterator.next_solution(),
            IteratedSolution::Unsatisfiable
        ));
    }

    #[test]
    fn dropping_the_iterator_restores_the_root_state() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(3, 6).expect("valid bounds");

        let mut brancher = solver.default_brancher();
        {
            let mut termination = Indefinite;
            let mut iterator = solver.get_solution_iterator(&mut brancher, &mut termination);
            assert!(matches!(
                iterator.next_solution(),
                IteratedSolution::Solution(_)
            ));
        }

        assert_eq!(3, solver.lower_bound(&x));
        assert_eq!(6, solver.upper_bound(&x));
    }

    #[test]
    fn variables_can_be_found_by_name() {
        let mut solver = Solver::default();
        let x = solver
            .new_named_bounded_integer(0, 1, "x")
            .expect("valid bounds");
        let graph = solver.new_named_graph(2, "g").expect("valid graph");

        assert_eq!(Some(VariableId::Integer(x)), solver.get_variable_by_name("x"));
        assert_eq!(Some("g"), solver.get_name(graph));
        assert_eq!(None, solver.get_variable_by_name("y"));
    }
}
