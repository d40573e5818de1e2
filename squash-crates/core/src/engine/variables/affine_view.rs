use std::cmp::Ordering;

use enumset::EnumSet;

use super::TransformableVariable;
use crate::engine::cp::DomainEvent;
use crate::engine::cp::OpaqueDomainEvent;
use crate::engine::cp::Watchers;
use crate::engine::predicates::Predicate;
use crate::engine::predicates::PredicateConstructor;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::math::num_ext::NumExt;

/// Models the constraint `y = ax + b`, by expressing the domain of `y` as a transformation of the
/// domain of `x`.
///
/// The view holds no state of its own: reads are mapped forwards through the transformation and
/// narrowing operations are mapped backwards onto the inner variable, rounding towards the
/// values which remain feasible. With a negative scale the roles of the bounds are swapped.
#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub struct AffineView<Inner> {
    inner: Inner,
    scale: i32,
    offset: i32,
}

impl<Inner> AffineView<Inner> {
    pub fn new(inner: Inner, scale: i32, offset: i32) -> Self {
        assert_ne!(scale, 0, "Multiplication by zero is not invertable");
        AffineView {
            inner,
            scale,
            offset,
        }
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn offset_value(&self) -> i32 {
        self.offset
    }

    /// Apply the inverse transformation of this view on a value, to go from the value in the domain
    /// of `self` to a value in the domain of `self.inner`.
    ///
    /// The result saturates at the `i32` range.
    fn invert(&self, value: i32, rounding: Rounding) -> i32 {
        self.invert_wide(value, rounding)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    fn invert_wide(&self, value: i32, rounding: Rounding) -> i64 {
        let inverted_translation = i64::from(value) - i64::from(self.offset);
        let scale = i64::from(self.scale);

        match rounding {
            Rounding::Up => NumExt::div_ceil(inverted_translation, scale),
            Rounding::Down => NumExt::div_floor(inverted_translation, scale),
        }
    }

    /// The inverse of `value` as a lower bound of `self.inner`; `None` if it exceeds every `i32`.
    fn inverted_lower_bound(&self, value: i32, rounding: Rounding) -> Option<i32> {
        let inverted = self.invert_wide(value, rounding);
        (inverted <= i64::from(i32::MAX)).then(|| inverted.max(i64::from(i32::MIN)) as i32)
    }

    /// The inverse of `value` as an upper bound of `self.inner`; `None` if it is below every `i32`.
    fn inverted_upper_bound(&self, value: i32, rounding: Rounding) -> Option<i32> {
        let inverted = self.invert_wide(value, rounding);
        (inverted >= i64::from(i32::MIN)).then(|| inverted.min(i64::from(i32::MAX)) as i32)
    }

    /// The value of `self.inner` which is mapped onto `value`, if there is one.
    fn preimage(&self, value: i32) -> Option<i32> {
        let translated = i64::from(value) - i64::from(self.offset);
        let scale = i64::from(self.scale);
        if translated % scale != 0 {
            return None;
        }

        i32::try_from(translated / scale).ok()
    }

    /// Apply the transformation of this view on a value of `self.inner`; the result saturates at
    /// the `i32` range.
    fn map(&self, value: i32) -> i32 {
        let mapped = i64::from(self.scale) * i64::from(value) + i64::from(self.offset);
        mapped.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl<View> IntegerVariable for AffineView<View>
where
    View: IntegerVariable,
{
    type AffineView = Self;

    fn lower_bound(&self, assignments: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.upper_bound(assignments))
        } else {
            self.map(self.inner.lower_bound(assignments))
        }
    }

    fn upper_bound(&self, assignments: &Assignments) -> i32 {
        if self.scale < 0 {
            self.map(self.inner.lower_bound(assignments))
        } else {
            self.map(self.inner.upper_bound(assignments))
        }
    }

    fn contains(&self, assignments: &Assignments, value: i32) -> bool {
        self.preimage(value)
            .is_some_and(|inner_value| self.inner.contains(assignments, inner_value))
    }

    fn size(&self, assignments: &Assignments) -> u64 {
        self.inner.size(assignments)
    }

    fn next_value(&self, assignments: &Assignments, value: i32) -> i32 {
        let inner_next = if self.scale > 0 {
            self.inner
                .next_value(assignments, self.invert(value, Rounding::Down))
        } else {
            self.inner
                .previous_value(assignments, self.invert(value, Rounding::Up))
        };

        if inner_next == i32::MAX || inner_next == i32::MIN {
            i32::MAX
        } else {
            self.map(inner_next)
        }
    }

    fn previous_value(&self, assignments: &Assignments, value: i32) -> i32 {
        let inner_previous = if self.scale > 0 {
            self.inner
                .previous_value(assignments, self.invert(value, Rounding::Up))
        } else {
            self.inner
                .next_value(assignments, self.invert(value, Rounding::Down))
        };

        if inner_previous == i32::MAX || inner_previous == i32::MIN {
            i32::MIN
        } else {
            self.map(inner_previous)
        }
    }

    fn tighten_lower_bound(
        &self,
        assignments: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        if self.scale > 0 {
            let bound = self
                .inverted_lower_bound(value, Rounding::Up)
                .ok_or(EmptyDomain)?;
            self.inner.tighten_lower_bound(assignments, bound)
        } else {
            let bound = self
                .inverted_upper_bound(value, Rounding::Down)
                .ok_or(EmptyDomain)?;
            self.inner.tighten_upper_bound(assignments, bound)
        }
    }

    fn tighten_upper_bound(
        &self,
        assignments: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        if self.scale > 0 {
            let bound = self
                .inverted_upper_bound(value, Rounding::Down)
                .ok_or(EmptyDomain)?;
            self.inner.tighten_upper_bound(assignments, bound)
        } else {
            let bound = self
                .inverted_lower_bound(value, Rounding::Up)
                .ok_or(EmptyDomain)?;
            self.inner.tighten_lower_bound(assignments, bound)
        }
    }

    fn remove_value(&self, assignments: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        match self.preimage(value) {
            Some(inner_value) => self.inner.remove_value(assignments, inner_value),
            None => Ok(false),
        }
    }

    fn remove_interval(
        &self,
        assignments: &mut Assignments,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        let (inner_lower, inner_upper) = if self.scale > 0 {
            (
                self.invert(lower, Rounding::Up),
                self.invert(upper, Rounding::Down),
            )
        } else {
            (
                self.invert(upper, Rounding::Up),
                self.invert(lower, Rounding::Down),
            )
        };

        if inner_lower > inner_upper {
            return Ok(false);
        }

        self.inner
            .remove_interval(assignments, inner_lower, inner_upper)
    }

    fn instantiate(&self, assignments: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        let inner_value = self.preimage(value).ok_or(EmptyDomain)?;
        self.inner.instantiate(assignments, inner_value)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, mut events: EnumSet<DomainEvent>) {
        let bound = DomainEvent::LowerBound | DomainEvent::UpperBound;
        let intersection = events.intersection(bound);
        if intersection.len() == 1 && self.scale.is_negative() {
            events = events.symmetric_difference(bound);
        }
        self.inner.watch_all(watchers, events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        if self.scale.is_negative() {
            match self.inner.unpack_event(event) {
                DomainEvent::LowerBound => DomainEvent::UpperBound,
                DomainEvent::UpperBound => DomainEvent::LowerBound,
                event => event,
            }
        } else {
            self.inner.unpack_event(event)
        }
    }
}

impl<View> TransformableVariable<AffineView<View>> for AffineView<View>
where
    View: IntegerVariable,
{
    fn scaled(&self, scale: i32) -> AffineView<View> {
        let (Some(new_scale), Some(new_offset)) =
            (self.scale.checked_mul(scale), self.offset.checked_mul(scale))
        else {
            panic!(
                "Scaling a view with scale {} and offset {} by {scale} overflows",
                self.scale, self.offset
            );
        };
        AffineView::new(self.inner.clone(), new_scale, new_offset)
    }

    fn offset(&self, offset: i32) -> AffineView<View> {
        let Some(new_offset) = self.offset.checked_add(offset) else {
            panic!(
                "Offsetting a view with offset {} by {offset} overflows",
                self.offset
            );
        };
        AffineView::new(self.inner.clone(), self.scale, new_offset)
    }
}

impl<Var: std::fmt::Debug> std::fmt::Debug for AffineView<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.scale == -1 {
            write!(f, "-")?;
        } else if self.scale != 1 {
            write!(f, "{} * ", self.scale)?;
        }

        write!(f, "({:?})", self.inner)?;

        match self.offset.cmp(&0) {
            Ordering::Less => write!(f, " - {}", self.offset.unsigned_abs())?,
            Ordering::Equal => {}
            Ordering::Greater => write!(f, " + {}", self.offset)?,
        }

        Ok(())
    }
}

impl<Var: PredicateConstructor<Value = i32>> PredicateConstructor for AffineView<Var> {
    type Value = Var::Value;

    fn lower_bound_predicate(&self, bound: Self::Value) -> Predicate {
        let predicate = if self.scale < 0 {
            self.inverted_upper_bound(bound, Rounding::Down)
                .map(|inverted_bound| self.inner.upper_bound_predicate(inverted_bound))
        } else {
            self.inverted_lower_bound(bound, Rounding::Up)
                .map(|inverted_bound| self.inner.lower_bound_predicate(inverted_bound))
        };
        predicate.unwrap_or(Predicate::False)
    }

    fn upper_bound_predicate(&self, bound: Self::Value) -> Predicate {
        let predicate = if self.scale < 0 {
            self.inverted_lower_bound(bound, Rounding::Up)
                .map(|inverted_bound| self.inner.lower_bound_predicate(inverted_bound))
        } else {
            self.inverted_upper_bound(bound, Rounding::Down)
                .map(|inverted_bound| self.inner.upper_bound_predicate(inverted_bound))
        };
        predicate.unwrap_or(Predicate::False)
    }

    fn equality_predicate(&self, bound: Self::Value) -> Predicate {
        match self.preimage(bound) {
            Some(inner_bound) => self.inner.equality_predicate(inner_bound),
            None => Predicate::False,
        }
    }

    fn disequality_predicate(&self, bound: Self::Value) -> Predicate {
        match self.preimage(bound) {
            Some(inner_bound) => self.inner.disequality_predicate(inner_bound),
            None => Predicate::True,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Rounding {
    Up,
    Down,
}
