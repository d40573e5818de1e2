//! A [`Brancher`] which simply uses a single [`VariableSelector`] and a single
//! [`ValueSelector`].

use std::marker::PhantomData;

use crate::basic_types::SolutionReference;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Branch;
use crate::branching::Brancher;
use crate::branching::SelectionContext;

/// An implementation of a [`Brancher`] which simply uses a single [`VariableSelector`] and a
/// single [`ValueSelector`] independently of one another.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect> {
    /// The [`VariableSelector`] of the [`Brancher`], determines which (unfixed) variable to branch
    /// next on.
    pub(crate) variable_selector: VariableSelect,
    /// The [`ValueSelector`] of the [`Brancher`] determines how to split the domain of the
    /// selected variable.
    pub(crate) value_selector: ValueSelect,
    /// [`PhantomData`] to ensure that the variable type is bound to the
    /// [`IndependentVariableValueBrancher`]
    pub(crate) variable_type: PhantomData<Var>,
}

impl<Var, VariableSelect, ValueSelect>
    IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    pub fn new(var_selector: VariableSelect, val_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector: var_selector,
            value_selector: val_selector,
            variable_type: PhantomData,
        }
    }
}

impl<Var, VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    /// First we select a variable
    ///  - If all variables under consideration are fixed (i.e. `select_variable` return None) then
    ///    we simply return None
    ///  - Otherwise we let the value selector create the branch on the selected variable
    fn next_branch(&mut self, context: &mut SelectionContext) -> Option<Branch> {
        self.variable_selector
            .select_variable(context)
            .map(|selected_variable| self.value_selector.select_value(context, selected_variable))
    }

    fn on_backtrack(&mut self) {
        self.variable_selector.on_backtrack();
        self.value_selector.on_backtrack();
    }

    fn on_solution(&mut self, solution: SolutionReference) {
        self.value_selector.on_solution(solution);
    }
}
