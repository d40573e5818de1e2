#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

//! Compares the solutions found by the solver on small random models against a brute-force
//! enumeration of the cartesian product of the domains.

mod helpers;

use helpers::collect_solutions;
use squash_solver::core::constraints;
use squash_solver::core::options::AllDifferentStrength;
use squash_solver::core::rand::rngs::SmallRng;
use squash_solver::core::rand::seq::SliceRandom;
use squash_solver::core::rand::Rng;
use squash_solver::core::rand::SeedableRng;
use squash_solver::core::results::ProblemSolution;
use squash_solver::core::variables::DomainId;
use squash_solver::core::variables::TransformableVariable;
use squash_solver::core::ConstraintOperationError;
use squash_solver::Solver;

const NUM_VARIABLES: usize = 4;
const NUM_MODELS: u64 = 40;

#[derive(Debug, Clone)]
enum RandomConstraint {
    /// `sum(coefficient * x[index]) <= rhs`
    Linear { terms: Vec<(i32, usize)>, rhs: i32 },
    NotEquals(usize, usize),
    AllDifferent(Vec<usize>, AllDifferentStrength),
}

impl RandomConstraint {
    fn is_satisfied(&self, values: &[i32]) -> bool {
        match self {
            RandomConstraint::Linear { terms, rhs } => {
                terms
                    .iter()
                    .map(|&(coefficient, index)| coefficient * values[index])
                    .sum::<i32>()
                    <= *rhs
            }
            RandomConstraint::NotEquals(a, b) => values[*a] != values[*b],
            RandomConstraint::AllDifferent(indices, _) => indices
                .iter()
                .enumerate()
                .all(|(i, &a)| indices[i + 1..].iter().all(|&b| values[a] != values[b])),
        }
    }

    fn post(
        &self,
        solver: &mut Solver,
        variables: &[DomainId],
    ) -> Result<(), ConstraintOperationError> {
        match self {
            RandomConstraint::Linear { terms, rhs } => solver
                .add_constraint(constraints::less_than_or_equals(
                    terms
                        .iter()
                        .map(|&(coefficient, index)| variables[index].scaled(coefficient))
                        .collect::<Vec<_>>(),
                    *rhs,
                ))
                .post(),
            RandomConstraint::NotEquals(a, b) => solver
                .add_constraint(constraints::binary_not_equals(variables[*a], variables[*b]))
                .post(),
            RandomConstraint::AllDifferent(indices, strength) => solver
                .add_constraint(constraints::all_different(
                    indices
                        .iter()
                        .map(|&index| variables[index])
                        .collect::<Vec<_>>(),
                    *strength,
                ))
                .post(),
        }
    }
}

#[derive(Debug)]
struct RandomModel {
    domains: Vec<(i32, i32)>,
    constraints: Vec<RandomConstraint>,
}

impl RandomModel {
    fn generate(rng: &mut SmallRng) -> RandomModel {
        let domains = (0..NUM_VARIABLES)
            .map(|_| {
                let lower_bound = rng.gen_range(-3..=1);
                (lower_bound, lower_bound + rng.gen_range(0..=3))
            })
            .collect();

        let num_constraints = rng.gen_range(1..=3);
        let constraints = (0..num_constraints)
            .map(|_| generate_constraint(rng))
            .collect();

        RandomModel {
            domains,
            constraints,
        }
    }

    fn brute_force(&self) -> Vec<Vec<i32>> {
        let mut assignments = vec![vec![]];
        for &(lower_bound, upper_bound) in &self.domains {
            assignments = assignments
                .into_iter()
                .flat_map(|partial: Vec<i32>| {
                    (lower_bound..=upper_bound).map(move |value| {
                        let mut extended = partial.clone();
                        extended.push(value);
                        extended
                    })
                })
                .collect();
        }

        assignments
            .into_iter()
            .filter(|values| {
                self.constraints
                    .iter()
                    .all(|constraint| constraint.is_satisfied(values))
            })
            .collect()
    }

    fn solve(&self) -> Vec<Vec<i32>> {
        let mut solver = Solver::default();
        let variables = self
            .domains
            .iter()
            .map(|&(lower_bound, upper_bound)| {
                solver
                    .new_bounded_integer(lower_bound, upper_bound)
                    .expect("valid bounds")
            })
            .collect::<Vec<_>>();

        for constraint in &self.constraints {
            // A model which is infeasible at the root has no solutions, which the enumeration
            // has to confirm.
            let _ = constraint.post(&mut solver, &variables);
        }

        let brancher = solver.default_brancher();
        collect_solutions(&mut solver, brancher, |solution| {
            variables
                .iter()
                .map(|&variable| solution.get_integer_value(variable))
                .collect()
        })
    }
}

fn generate_constraint(rng: &mut SmallRng) -> RandomConstraint {
    let mut indices = (0..NUM_VARIABLES).collect::<Vec<_>>();
    indices.shuffle(rng);

    match rng.gen_range(0..3) {
        0 => {
            let num_terms = rng.gen_range(1..=NUM_VARIABLES);
            RandomConstraint::Linear {
                terms: indices[..num_terms]
                    .iter()
                    .map(|&index| {
                        let coefficient = *[-2, -1, 1, 2]
                            .choose(rng)
                            .expect("the coefficients are non-empty");
                        (coefficient, index)
                    })
                    .collect(),
                rhs: rng.gen_range(-4..=4),
            }
        }
        1 => RandomConstraint::NotEquals(indices[0], indices[1]),
        _ => {
            let num_variables = rng.gen_range(2..=3);
            let strength = if rng.gen_bool(0.5) {
                AllDifferentStrength::Bounds
            } else {
                AllDifferentStrength::Instantiation
            };
            RandomConstraint::AllDifferent(indices[..num_variables].to_vec(), strength)
        }
    }
}

#[test]
fn solver_finds_exactly_the_brute_force_solutions() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..NUM_MODELS {
        let model = RandomModel::generate(&mut rng);

        let mut expected = model.brute_force();
        let mut actual = model.solve();

        // Every reported solution is unique
        let num_reported = actual.len();
        actual.sort();
        actual.dedup();
        assert_eq!(num_reported, actual.len(), "duplicate solutions for {model:?}");

        expected.sort();
        assert_eq!(expected, actual, "different solutions for {model:?}");
    }
}

#[test]
fn every_reported_solution_satisfies_the_constraints() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..NUM_MODELS {
        let model = RandomModel::generate(&mut rng);

        for solution in model.solve() {
            for (&value, &(lower_bound, upper_bound)) in solution.iter().zip(&model.domains) {
                assert!(lower_bound <= value && value <= upper_bound);
            }
            assert!(
                model
                    .constraints
                    .iter()
                    .all(|constraint| constraint.is_satisfied(&solution)),
                "{solution:?} violates {model:?}"
            );
        }
    }
}
