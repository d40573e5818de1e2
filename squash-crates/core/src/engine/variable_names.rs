use crate::containers::HashMap;
use crate::engine::variables::VariableId;

/// The names given to variables when they were created.
#[derive(Debug, Default, Clone)]
pub(crate) struct VariableNames {
    names: HashMap<VariableId, String>,
    variable_by_name: HashMap<String, VariableId>,
}

impl VariableNames {
    /// Get the name associated with a variable.
    pub(crate) fn get_name(&self, variable: impl Into<VariableId>) -> Option<&str> {
        self.names.get(&variable.into()).map(|name| name.as_str())
    }

    /// Get the variable associated with the given name.
    pub(crate) fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_by_name.get(name).copied()
    }

    /// Add a name to the variable. This will override the existing name if it exists.
    pub(crate) fn add(&mut self, variable: impl Into<VariableId>, name: String) {
        let variable = variable.into();
        let _ = self.names.insert(variable, name.clone());
        let _ = self.variable_by_name.insert(name, variable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;
    use crate::engine::variables::SetId;

    #[test]
    fn names_are_looked_up_in_both_directions() {
        let mut names = VariableNames::default();
        names.add(DomainId::new(0), "x".to_owned());
        names.add(SetId::new(0), "s".to_owned());

        assert_eq!(Some("x"), names.get_name(DomainId::new(0)));
        assert_eq!(Some("s"), names.get_name(SetId::new(0)));
        assert_eq!(None, names.get_name(DomainId::new(1)));
        assert_eq!(
            Some(VariableId::Integer(DomainId::new(0))),
            names.get_variable_by_name("x")
        );
    }
}
