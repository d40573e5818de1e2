use squash_core::branching::branchers::DynamicBrancher;
use squash_core::branching::branchers::IndependentVariableValueBrancher;
use squash_core::branching::value_selection::InDomainMin;
use squash_core::branching::variable_selection::InputOrder;
use squash_core::constraints;
use squash_core::constraints::AllDifferentStrength;
use squash_core::ConstraintOperationError;
use squash_core::Solver;

use super::ModelInstance;
use super::Output;

/// `size` variables over `[0, size - 1]` with `v[i] <= v[i + 1]` and all-different over `v`.
pub fn big_leq(
    solver: &mut Solver,
    size: u32,
    strength: AllDifferentStrength,
) -> Result<ModelInstance, ConstraintOperationError> {
    let upper_bound = size as i32 - 1;
    let variables = (0..size)
        .map(|index| solver.new_named_bounded_integer(0, upper_bound, format!("v[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    for window in variables.windows(2) {
        solver
            .add_constraint(constraints::binary_less_than_or_equals(
                window[0], window[1],
            ))
            .post()?;
    }

    solver
        .add_constraint(constraints::all_different(variables.clone(), strength))
        .post()?;

    Ok(ModelInstance {
        outputs: vec![Output::Integers {
            name: "v".to_owned(),
            variables: variables.clone(),
        }],
        search: DynamicBrancher::new(vec![Box::new(IndependentVariableValueBrancher::new(
            InputOrder::new(&variables),
            InDomainMin,
        ))]),
        objective: variables.last().copied(),
    })
}
