use squash_core::branching::branchers::DynamicBrancher;
use squash_core::branching::branchers::IndependentVariableValueBrancher;
use squash_core::branching::value_selection::InDomainMin;
use squash_core::branching::variable_selection::FirstFail;
use squash_core::constraints;
use squash_core::constraints::AllDifferentStrength;
use squash_core::variables::TransformableVariable;
use squash_core::ConstraintOperationError;
use squash_core::Solver;

use super::ModelInstance;
use super::Output;

/// The n-queens problem: `queens[i]` is the column of the queen in row `i`, and no two queens share
/// a column or a diagonal.
pub fn queens(
    solver: &mut Solver,
    size: u32,
    strength: AllDifferentStrength,
) -> Result<ModelInstance, ConstraintOperationError> {
    let upper_bound = size as i32 - 1;
    let queens = (0..size)
        .map(|row| solver.new_named_bounded_integer(0, upper_bound, format!("q[{row}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let diagonal = |offset: i32| {
        queens
            .iter()
            .enumerate()
            .map(|(row, queen)| queen.offset(offset * row as i32))
            .collect::<Vec<_>>()
    };
    let ascending = diagonal(1);
    let descending = diagonal(-1);

    solver
        .add_constraint(constraints::all_different(queens.clone(), strength))
        .post()?;
    solver
        .add_constraint(constraints::all_different(ascending, strength))
        .post()?;
    solver
        .add_constraint(constraints::all_different(descending, strength))
        .post()?;

    Ok(ModelInstance {
        outputs: vec![Output::Integers {
            name: "q".to_owned(),
            variables: queens.clone(),
        }],
        search: DynamicBrancher::new(vec![Box::new(IndependentVariableValueBrancher::new(
            FirstFail::new(&queens),
            InDomainMin,
        ))]),
        objective: queens.first().copied(),
    })
}

#[cfg(test)]
mod tests {
    use squash_core::results::solution_iterator::IteratedSolution;
    use squash_core::termination::Indefinite;

    use super::*;

    fn count_solutions(size: u32, strength: AllDifferentStrength) -> usize {
        let mut solver = Solver::default();
        let mut instance = queens(&mut solver, size, strength).expect("satisfiable at the root");

        let mut termination = Indefinite;
        let mut iterator = solver.get_solution_iterator(&mut instance.search, &mut termination);
        let mut num_solutions = 0;
        while let IteratedSolution::Solution(_) = iterator.next_solution() {
            num_solutions += 1;
        }
        num_solutions
    }

    #[test]
    fn number_of_solutions_matches_the_known_counts() {
        assert_eq!(2, count_solutions(4, AllDifferentStrength::Instantiation));
        assert_eq!(10, count_solutions(5, AllDifferentStrength::Instantiation));
        assert_eq!(4, count_solutions(6, AllDifferentStrength::Bounds));
    }

    #[test]
    fn three_queens_have_no_solution() {
        assert_eq!(0, count_solutions(3, AllDifferentStrength::Bounds));
    }
}
