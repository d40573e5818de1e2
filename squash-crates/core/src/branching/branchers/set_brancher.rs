use crate::branching::variable_selection::VariableSelector;
use crate::branching::Branch;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::SetId;
use crate::propagation::ReadDomains;

/// A [`Brancher`] over set variables: the [`VariableSelector`] picks an uninstantiated set, which
/// is then branched on its smallest undecided element, first including and then excluding it.
#[derive(Debug, Clone)]
pub struct SetBrancher<Selector> {
    selector: Selector,
}

impl<Selector: VariableSelector<SetId>> SetBrancher<Selector> {
    pub fn new(selector: Selector) -> Self {
        SetBrancher { selector }
    }
}

impl<Selector: VariableSelector<SetId>> Brancher for SetBrancher<Selector> {
    fn next_branch(&mut self, context: &mut SelectionContext) -> Option<Branch> {
        let set = self.selector.select_variable(context)?;

        let element = context
            .iterate_envelope(set)
            .find(|&element| !context.kernel_contains(set, element))?;

        Some(Branch::binary(
            Decision::Include { set, element },
            Decision::Exclude { set, element },
        ))
    }

    fn on_backtrack(&mut self) {
        self.selector.on_backtrack();
    }
}
