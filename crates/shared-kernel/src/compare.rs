// crates/shared-kernel/src/compare.rs
use std::cmp::Ordering;

use crate::error::DomainResult;

/// Total order whose comparison may be refused, e.g. amounts in two currencies.
pub trait Comparable {
    fn try_cmp(&self, other: &Self) -> DomainResult<Ordering>;

    #[inline]
    fn try_ge(&self, other: &Self) -> DomainResult<bool> {
        Ok(self.try_cmp(other)? != Ordering::Less)
    }

    #[inline]
    fn try_le(&self, other: &Self) -> DomainResult<bool> {
        Ok(self.try_cmp(other)? != Ordering::Greater)
    }
}

impl<T: Ord> Comparable for T {
    #[inline]
    fn try_cmp(&self, other: &Self) -> DomainResult<Ordering> {
        Ok(self.cmp(other))
    }
}
