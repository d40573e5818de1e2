use crate::engine::variables::DomainId;

/// Representation of a domain operation on a [`DomainId`].
///
/// Predicates over views are translated to predicates over the underlying domain when they are
/// constructed (see [`PredicateConstructor`](super::PredicateConstructor)). A translation can
/// yield a predicate which does not depend on the domain at all, e.g. `[2x == 3]`; these are
/// represented by [`Predicate::True`] and [`Predicate::False`].
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub enum Predicate {
    LowerBound {
        domain_id: DomainId,
        lower_bound: i32,
    },
    UpperBound {
        domain_id: DomainId,
        upper_bound: i32,
    },
    NotEqual {
        domain_id: DomainId,
        not_equal_constant: i32,
    },
    Equal {
        domain_id: DomainId,
        equality_constant: i32,
    },
    True,
    False,
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => write!(f, "[{domain_id} >= {lower_bound}]"),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => write!(f, "[{domain_id} <= {upper_bound}]"),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => write!(f, "[{domain_id} != {not_equal_constant}]"),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => write!(f, "[{domain_id} == {equality_constant}]"),
            Predicate::True => write!(f, "[true]"),
            Predicate::False => write!(f, "[false]"),
        }
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::Predicate;
    use crate::engine::variables::DomainId;

    #[test]
    fn predicates_are_displayed_as_comparisons() {
        let domain_id = DomainId::new(0);

        assert_eq!(
            format!("[{domain_id} >= 3]"),
            Predicate::LowerBound {
                domain_id,
                lower_bound: 3
            }
            .to_string()
        );
        assert_eq!(
            format!("[{domain_id} != -1]"),
            format!(
                "{:?}",
                Predicate::NotEqual {
                    domain_id,
                    not_equal_constant: -1
                }
            )
        );
        assert_eq!("[false]", Predicate::False.to_string());
    }
}
