// crates/domain/src/value_objects/range.rs
use ddd_primitives_shared_kernel::{Comparable, DomainResult};

/// Inclusive range with optional bounds; a missing bound leaves that side open.
///
/// No ordering between `min` and `max` is enforced on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Range<T> {
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    #[inline]
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    #[inline]
    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.min.is_some() && self.max.is_some()
    }

    pub fn into_bounds(self) -> (Option<T>, Option<T>) {
        (self.min, self.max)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Range<U> {
        Range { min: self.min.map(&mut f), max: self.max.map(f) }
    }

    /// Both bounds of `self` and `other`, or `None` when any of the four is open.
    fn closed_pair<'a>(&'a self, other: &'a Self) -> Option<((&'a T, &'a T), (&'a T, &'a T))> {
        match (&self.min, &self.max, &other.min, &other.max) {
            (Some(min), Some(max), Some(other_min), Some(other_max)) => {
                Some(((min, max), (other_min, other_max)))
            }
            _ => {
                tracing::trace!("open bound excludes range containment");
                None
            }
        }
    }
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: PartialOrd> Range<T> {
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.min.as_ref().is_none_or(|m| value >= m) && self.max.as_ref().is_none_or(|m| value <= m)
    }

    /// Closed-only containment: any open bound on either side yields `false`.
    pub fn contains_range(&self, other: &Self) -> bool {
        self.closed_pair(other)
            .is_some_and(|((min, max), (other_min, other_max))| other_min >= min && other_max <= max)
    }
}

impl<T: Comparable> Range<T> {
    /// Like [`Range::contains`] but surfaces refused comparisons.
    pub fn try_contains(&self, value: &T) -> DomainResult<bool> {
        let above_min = match &self.min {
            Some(min) => value.try_ge(min)?,
            None => true,
        };
        let below_max = match &self.max {
            Some(max) => value.try_le(max)?,
            None => true,
        };
        Ok(above_min && below_max)
    }

    pub fn try_contains_range(&self, other: &Self) -> DomainResult<bool> {
        match self.closed_pair(other) {
            Some(((min, max), (other_min, other_max))) => {
                Ok(other_min.try_ge(min)? && other_max.try_le(max)?)
            }
            None => Ok(false),
        }
    }
}
