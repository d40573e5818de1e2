use squash_core::branching::branchers::ArcBrancher;
use squash_core::branching::branchers::ArcSelection;
use squash_core::branching::branchers::DynamicBrancher;
use squash_core::constraints;
use squash_core::ConstraintOperationError;
use squash_core::Solver;

use super::ModelInstance;
use super::Output;

/// A Hamiltonian path from node `0` to node `size - 1` in the complete graph over `size` nodes.
pub fn hamiltonian_path(
    solver: &mut Solver,
    size: u32,
) -> Result<ModelInstance, ConstraintOperationError> {
    let graph = solver.new_named_graph(size, "path")?;
    let source = 0;
    let sink = size.saturating_sub(1);

    solver
        .add_constraint(constraints::hamiltonian_path(graph, source, sink))
        .post()?;

    Ok(ModelInstance {
        outputs: vec![Output::Path {
            name: "path".to_owned(),
            graph,
            source,
        }],
        search: DynamicBrancher::new(vec![Box::new(ArcBrancher::new(
            graph,
            ArcSelection::PathExtension { source },
        ))]),
        objective: None,
    })
}

#[cfg(test)]
mod tests {
    use squash_core::results::SatisfactionResult;
    use squash_core::termination::Indefinite;

    use super::*;

    #[test]
    fn path_visits_every_node() {
        let mut solver = Solver::default();
        let mut instance = hamiltonian_path(&mut solver, 4).expect("satisfiable");

        match solver.satisfy(&mut instance.search, &mut Indefinite) {
            SatisfactionResult::Satisfiable(solution) => {
                let printed = instance.outputs[0].format(&solution);
                assert!(printed.starts_with("path = [0, "));
                assert!(printed.ends_with(", 3];"));
                for node in ["1", "2"] {
                    assert!(printed.contains(node));
                }
            }
            result => panic!("expected a solution, got {result:?}"),
        }
    }

    #[test]
    fn empty_graph_is_rejected() {
        let mut solver = Solver::default();

        assert_eq!(
            Some(ConstraintOperationError::NodeOutOfRange {
                node: 0,
                num_nodes: 0
            }),
            hamiltonian_path(&mut solver, 0).err()
        );
    }
}
