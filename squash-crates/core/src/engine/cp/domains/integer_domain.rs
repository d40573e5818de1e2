use crate::basic_types::Trail;
use crate::containers::BitSet;
use crate::engine::cp::DomainEvent;
use crate::engine::cp::TrailEntry;
use crate::engine::variables::DomainId;
use crate::engine::EmptyDomain;
use crate::squash_assert_moderate;

/// The domain of an integer variable.
///
/// A bounded domain only stores its bounds; removing a value strictly between them cannot be
/// represented and is ignored. An enumerated domain additionally keeps a bit per value of its
/// initial range. Tightening a bound of an enumerated domain does not touch the bits; the values
/// outside of the bounds are simply not part of the domain anymore, which keeps undoing a bound
/// change a matter of restoring two integers.
///
/// The bounds of an enumerated domain are always values whose bit is set.
#[derive(Clone, Debug)]
pub(crate) struct IntegerDomain {
    lower_bound: i32,
    upper_bound: i32,
    size: u64,
    values: Option<EnumeratedValues>,
}

#[derive(Clone, Debug)]
struct EnumeratedValues {
    offset: i32,
    present: BitSet,
}

impl EnumeratedValues {
    fn index(&self, value: i32) -> usize {
        (i64::from(value) - i64::from(self.offset)) as usize
    }

    fn value(&self, index: usize) -> i32 {
        (i64::from(self.offset) + index as i64) as i32
    }
}

impl IntegerDomain {
    pub(crate) fn bounded(lower_bound: i32, upper_bound: i32) -> IntegerDomain {
        squash_assert_moderate!(lower_bound <= upper_bound);

        IntegerDomain {
            lower_bound,
            upper_bound,
            size: (i64::from(upper_bound) - i64::from(lower_bound) + 1) as u64,
            values: None,
        }
    }

    /// Creates an enumerated domain; `values` has to be non-empty, sorted and free of duplicates.
    pub(crate) fn enumerated(values: &[i32]) -> IntegerDomain {
        squash_assert_moderate!(!values.is_empty());
        squash_assert_moderate!(values.windows(2).all(|pair| pair[0] < pair[1]));

        let lower_bound = values[0];
        let upper_bound = values[values.len() - 1];
        let capacity = (i64::from(upper_bound) - i64::from(lower_bound) + 1) as usize;

        let mut enumerated = EnumeratedValues {
            offset: lower_bound,
            present: BitSet::new(capacity, false),
        };
        for &value in values {
            let index = enumerated.index(value);
            let _ = enumerated.present.insert(index);
        }

        IntegerDomain {
            lower_bound,
            upper_bound,
            size: values.len() as u64,
            values: Some(enumerated),
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    pub(crate) fn is_enumerated(&self) -> bool {
        self.values.is_some()
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        if value < self.lower_bound || value > self.upper_bound {
            return false;
        }

        match &self.values {
            None => true,
            Some(values) => values.present.contains(values.index(value)),
        }
    }

    pub(crate) fn next_value(&self, value: i32) -> i32 {
        if value >= self.upper_bound {
            return i32::MAX;
        }
        if value < self.lower_bound {
            return self.lower_bound;
        }

        match &self.values {
            None => value + 1,
            Some(values) => values
                .present
                .next_set_bit(values.index(value) + 1)
                .map(|index| values.value(index))
                .unwrap_or(i32::MAX),
        }
    }

    pub(crate) fn previous_value(&self, value: i32) -> i32 {
        if value <= self.lower_bound {
            return i32::MIN;
        }
        if value > self.upper_bound {
            return self.upper_bound;
        }

        match &self.values {
            None => value - 1,
            Some(values) => values
                .present
                .previous_set_bit(values.index(value) - 1)
                .map(|index| values.value(index))
                .unwrap_or(i32::MIN),
        }
    }

    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        value: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        if value <= self.lower_bound {
            return Ok(None);
        }
        if value > self.upper_bound {
            return Err(EmptyDomain);
        }

        let new_lower_bound = self.first_value_from(value);
        self.raise_lower_bound(domain_id, new_lower_bound, trail);

        Ok(Some(self.bound_event(DomainEvent::LowerBound)))
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        value: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        if value >= self.upper_bound {
            return Ok(None);
        }
        if value < self.lower_bound {
            return Err(EmptyDomain);
        }

        let new_upper_bound = self.last_value_up_to(value);
        self.lower_upper_bound(domain_id, new_upper_bound, trail);

        Ok(Some(self.bound_event(DomainEvent::UpperBound)))
    }

    pub(crate) fn remove_value(
        &mut self,
        domain_id: DomainId,
        value: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        if !self.contains(value) {
            return Ok(None);
        }
        if value == self.lower_bound {
            let new_lower_bound = value.checked_add(1).ok_or(EmptyDomain)?;
            return self.tighten_lower_bound(domain_id, new_lower_bound, trail);
        }
        if value == self.upper_bound {
            let new_upper_bound = value.checked_sub(1).ok_or(EmptyDomain)?;
            return self.tighten_upper_bound(domain_id, new_upper_bound, trail);
        }

        let Some(values) = &mut self.values else {
            return Ok(None);
        };

        let _ = values.present.remove(values.index(value));
        self.size -= 1;
        trail.push(TrailEntry::Removal {
            domain: domain_id,
            value,
        });

        Ok(Some(DomainEvent::Removal))
    }

    pub(crate) fn remove_interval(
        &mut self,
        domain_id: DomainId,
        lower: i32,
        upper: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        let lower = lower.max(self.lower_bound);
        let upper = upper.min(self.upper_bound);
        if lower > upper {
            return Ok(None);
        }

        if lower == self.lower_bound {
            let new_lower_bound = upper.checked_add(1).ok_or(EmptyDomain)?;
            return self.tighten_lower_bound(domain_id, new_lower_bound, trail);
        }
        if upper == self.upper_bound {
            let new_upper_bound = lower.checked_sub(1).ok_or(EmptyDomain)?;
            return self.tighten_upper_bound(domain_id, new_upper_bound, trail);
        }

        let Some(values) = &mut self.values else {
            return Ok(None);
        };

        let mut removed_any = false;
        let mut current = values.present.next_set_bit(values.index(lower));
        while let Some(index) = current {
            let value = values.value(index);
            if value > upper {
                break;
            }

            let _ = values.present.remove(index);
            self.size -= 1;
            trail.push(TrailEntry::Removal {
                domain: domain_id,
                value,
            });
            removed_any = true;

            current = values.present.next_set_bit(index + 1);
        }

        Ok(removed_any.then_some(DomainEvent::Removal))
    }

    pub(crate) fn instantiate(
        &mut self,
        domain_id: DomainId,
        value: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        if !self.contains(value) {
            return Err(EmptyDomain);
        }
        if self.lower_bound == self.upper_bound {
            return Ok(None);
        }

        if value > self.lower_bound {
            self.raise_lower_bound(domain_id, value, trail);
        }
        if value < self.upper_bound {
            self.lower_upper_bound(domain_id, value, trail);
        }

        Ok(Some(DomainEvent::Assign))
    }

    pub(crate) fn undo_lower_bound(&mut self, old_lower_bound: i32, old_size: u64) {
        self.lower_bound = old_lower_bound;
        self.size = old_size;
    }

    pub(crate) fn undo_upper_bound(&mut self, old_upper_bound: i32, old_size: u64) {
        self.upper_bound = old_upper_bound;
        self.size = old_size;
    }

    pub(crate) fn undo_removal(&mut self, value: i32) {
        if let Some(values) = &mut self.values {
            let _ = values.present.insert(values.index(value));
            self.size += 1;
        }
    }

    /// The smallest value of the domain which is at least `value`; `value` may not exceed the
    /// upper bound.
    fn first_value_from(&self, value: i32) -> i32 {
        match &self.values {
            None => value,
            Some(values) => values
                .present
                .next_set_bit(values.index(value))
                .map(|index| values.value(index))
                .unwrap_or(self.upper_bound),
        }
    }

    /// The largest value of the domain which is at most `value`; `value` may not be below the
    /// lower bound.
    fn last_value_up_to(&self, value: i32) -> i32 {
        match &self.values {
            None => value,
            Some(values) => values
                .present
                .previous_set_bit(values.index(value))
                .map(|index| values.value(index))
                .unwrap_or(self.lower_bound),
        }
    }

    fn raise_lower_bound(
        &mut self,
        domain_id: DomainId,
        new_lower_bound: i32,
        trail: &mut Trail<TrailEntry>,
    ) {
        squash_assert_moderate!(self.contains(new_lower_bound));

        let removed = match &self.values {
            None => (i64::from(new_lower_bound) - i64::from(self.lower_bound)) as u64,
            Some(values) => values.present.count_in_range(
                values.index(self.lower_bound),
                values.index(new_lower_bound) - 1,
            ) as u64,
        };

        trail.push(TrailEntry::LowerBound {
            domain: domain_id,
            old_lower_bound: self.lower_bound,
            old_size: self.size,
        });
        self.lower_bound = new_lower_bound;
        self.size -= removed;
    }

    fn lower_upper_bound(
        &mut self,
        domain_id: DomainId,
        new_upper_bound: i32,
        trail: &mut Trail<TrailEntry>,
    ) {
        squash_assert_moderate!(self.contains(new_upper_bound));

        let removed = match &self.values {
            None => (i64::from(self.upper_bound) - i64::from(new_upper_bound)) as u64,
            Some(values) => values.present.count_in_range(
                values.index(new_upper_bound) + 1,
                values.index(self.upper_bound),
            ) as u64,
        };

        trail.push(TrailEntry::UpperBound {
            domain: domain_id,
            old_upper_bound: self.upper_bound,
            old_size: self.size,
        });
        self.upper_bound = new_upper_bound;
        self.size -= removed;
    }

    fn bound_event(&self, event: DomainEvent) -> DomainEvent {
        if self.lower_bound == self.upper_bound {
            DomainEvent::Assign
        } else {
            event
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undo_all(domain: &mut IntegerDomain, trail: &mut Trail<TrailEntry>) {
        for entry in trail.undo_to(Default::default()) {
            match entry {
                TrailEntry::LowerBound {
                    old_lower_bound,
                    old_size,
                    ..
                } => domain.undo_lower_bound(old_lower_bound, old_size),
                TrailEntry::UpperBound {
                    old_upper_bound,
                    old_size,
                    ..
                } => domain.undo_upper_bound(old_upper_bound, old_size),
                TrailEntry::Removal { value, .. } => domain.undo_removal(value),
                _ => unreachable!(),
            }
        }
    }

    fn values(domain: &IntegerDomain) -> Vec<i32> {
        (domain.lower_bound()..=domain.upper_bound())
            .filter(|&value| domain.contains(value))
            .collect()
    }

    const ID: DomainId = DomainId::new(0);

    #[test]
    fn tightening_an_enumerated_bound_skips_to_the_next_value() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::enumerated(&[1, 4, 6, 9]);

        let event = domain.tighten_lower_bound(ID, 2, &mut trail);

        assert_eq!(Ok(Some(DomainEvent::LowerBound)), event);
        assert_eq!(4, domain.lower_bound());
        assert_eq!(3, domain.size());
    }

    #[test]
    fn a_bound_change_which_fixes_the_domain_is_an_assignment() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::bounded(0, 5);

        let _ = domain.tighten_lower_bound(ID, 3, &mut trail);
        let event = domain.tighten_upper_bound(ID, 3, &mut trail);

        assert_eq!(Ok(Some(DomainEvent::Assign)), event);
        assert_eq!(1, domain.size());
    }

    #[test]
    fn implied_narrowings_are_no_ops() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::enumerated(&[1, 2, 5]);

        assert_eq!(Ok(None), domain.tighten_lower_bound(ID, 1, &mut trail));
        assert_eq!(Ok(None), domain.tighten_upper_bound(ID, 7, &mut trail));
        assert_eq!(Ok(None), domain.remove_value(ID, 3, &mut trail));
        assert_eq!(Ok(None), domain.remove_interval(ID, 3, 4, &mut trail));
        assert!(trail.is_empty());
    }

    #[test]
    fn emptying_narrowings_fail_without_trailing() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::enumerated(&[1, 2, 5]);

        assert_eq!(Err(EmptyDomain), domain.tighten_lower_bound(ID, 6, &mut trail));
        assert_eq!(Err(EmptyDomain), domain.tighten_upper_bound(ID, 0, &mut trail));
        assert_eq!(Err(EmptyDomain), domain.remove_interval(ID, 0, 10, &mut trail));
        assert_eq!(Err(EmptyDomain), domain.instantiate(ID, 3, &mut trail));
        assert!(trail.is_empty());
        assert_eq!(vec![1, 2, 5], values(&domain));
    }

    #[test]
    fn removing_the_last_value_fails() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::bounded(3, 3);

        assert_eq!(Err(EmptyDomain), domain.remove_value(ID, 3, &mut trail));
    }

    #[test]
    fn removals_at_the_extremes_of_i32_do_not_overflow() {
        let mut trail = Trail::default();

        let mut domain = IntegerDomain::bounded(i32::MAX, i32::MAX);
        assert_eq!(Err(EmptyDomain), domain.remove_value(ID, i32::MAX, &mut trail));
        assert_eq!(
            Err(EmptyDomain),
            domain.remove_interval(ID, i32::MAX - 5, i32::MAX, &mut trail)
        );

        let mut domain = IntegerDomain::bounded(i32::MIN, i32::MIN + 1);
        assert_eq!(
            Err(EmptyDomain),
            domain.remove_interval(ID, i32::MIN, i32::MIN + 1, &mut trail)
        );
        assert!(trail.is_empty());

        let mut domain = IntegerDomain::bounded(i32::MAX - 3, i32::MAX);
        assert_eq!(
            Ok(Some(DomainEvent::UpperBound)),
            domain.remove_value(ID, i32::MAX, &mut trail)
        );
        assert_eq!(i32::MAX - 1, domain.upper_bound());
        assert_eq!(
            Ok(Some(DomainEvent::LowerBound)),
            domain.remove_interval(ID, i32::MIN, i32::MAX - 3, &mut trail)
        );
        assert_eq!(i32::MAX - 2, domain.lower_bound());
        assert_eq!(2, domain.size());
    }

    #[test]
    fn the_full_range_has_the_size_of_all_i32_values() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::bounded(i32::MIN, i32::MAX);

        assert_eq!(1_u64 << 32, domain.size());

        let _ = domain.tighten_lower_bound(ID, 0, &mut trail);
        assert_eq!(1_u64 << 31, domain.size());

        undo_all(&mut domain, &mut trail);
        assert_eq!(1_u64 << 32, domain.size());
        assert_eq!(i32::MAX, domain.next_value(i32::MAX - 1));
        assert_eq!(i32::MIN, domain.previous_value(i32::MIN));
    }

    #[test]
    fn bounded_domains_ignore_interior_removals() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::bounded(0, 9);

        assert_eq!(Ok(None), domain.remove_value(ID, 4, &mut trail));
        assert_eq!(Ok(None), domain.remove_interval(ID, 3, 6, &mut trail));
        assert_eq!(10, domain.size());

        assert_eq!(
            Ok(Some(DomainEvent::LowerBound)),
            domain.remove_value(ID, 0, &mut trail)
        );
        assert_eq!(1, domain.lower_bound());
    }

    #[test]
    fn removing_a_bound_of_an_enumerated_domain_moves_it() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::enumerated(&[1, 3, 4, 8]);

        assert_eq!(
            Ok(Some(DomainEvent::UpperBound)),
            domain.remove_value(ID, 8, &mut trail)
        );
        assert_eq!(4, domain.upper_bound());
        assert_eq!(
            Ok(Some(DomainEvent::Assign)),
            domain.remove_interval(ID, -5, 3, &mut trail)
        );
        assert_eq!(4, domain.lower_bound());
        assert_eq!(1, domain.size());
    }

    #[test]
    fn next_and_previous_values_use_sentinels() {
        let domain = IntegerDomain::enumerated(&[2, 5, 7]);

        assert_eq!(2, domain.next_value(-100));
        assert_eq!(5, domain.next_value(2));
        assert_eq!(7, domain.next_value(6));
        assert_eq!(i32::MAX, domain.next_value(7));
        assert_eq!(7, domain.previous_value(100));
        assert_eq!(2, domain.previous_value(5));
        assert_eq!(i32::MIN, domain.previous_value(2));
    }

    #[test]
    fn undoing_restores_the_domain_exactly() {
        let mut trail = Trail::default();
        let mut domain = IntegerDomain::enumerated(&(0..20).collect::<Vec<_>>());

        let _ = domain.remove_interval(ID, 5, 8, &mut trail);
        let _ = domain.remove_value(ID, 12, &mut trail);
        let _ = domain.tighten_lower_bound(ID, 3, &mut trail);
        let _ = domain.instantiate(ID, 10, &mut trail);
        assert_eq!(vec![10], values(&domain));

        undo_all(&mut domain, &mut trail);

        assert_eq!((0..20).collect::<Vec<_>>(), values(&domain));
        assert_eq!(20, domain.size());
    }
}
