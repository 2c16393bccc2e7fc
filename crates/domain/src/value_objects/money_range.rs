// crates/domain/src/value_objects/money_range.rs
use std::any::{Any, type_name};

use ddd_primitives_shared_kernel::{CurrencyCode, Decimal, DomainError, DomainResult, MismatchSite, Money};

use super::Range;

/// Range of monetary amounts whose bounds must share one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoneyRange(Range<Money>);

impl MoneyRange {
    pub const fn new(min: Option<Money>, max: Option<Money>) -> Self {
        Self(Range::new(min, max))
    }

    pub const fn unbounded() -> Self {
        Self(Range::unbounded())
    }

    /// Wraps raw magnitudes into amounts tagged with `currency`.
    pub fn of_currency(currency: CurrencyCode, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self::new(min.map(|m| Money::new(m, currency)), max.map(|m| Money::new(m, currency)))
    }

    /// Adapts a loosely typed range; every present bound must be a [`Money`].
    pub fn try_from_range<T: Any>(range: Range<T>) -> DomainResult<Self> {
        let (min, max) = range.into_bounds();
        Ok(Self::new(min.map(money_bound).transpose()?, max.map(money_bound).transpose()?))
    }

    #[inline]
    pub fn min(&self) -> Option<&Money> {
        self.0.min()
    }

    #[inline]
    pub fn max(&self) -> Option<&Money> {
        self.0.max()
    }

    pub fn as_range(&self) -> &Range<Money> {
        &self.0
    }

    pub fn into_range(self) -> Range<Money> {
        self.0
    }

    /// Currency shared by the present bounds, `None` when fully open.
    pub fn currency(&self) -> DomainResult<Option<CurrencyCode>> {
        match (self.0.min(), self.0.max()) {
            (Some(min), Some(max)) if !min.is_same_currency(max) => Err(DomainError::CurrencyMismatch {
                left: min.currency(),
                right: max.currency(),
                site: MismatchSite::Bounds,
            }),
            (Some(bound), _) | (None, Some(bound)) => Ok(Some(bound.currency())),
            (None, None) => Ok(None),
        }
    }

    /// Inclusive containment. An amount in another currency than a present
    /// bound fails with `CurrencyMismatch` rather than reporting `false`.
    pub fn contains(&self, amount: &Money) -> DomainResult<bool> {
        self.currency()?;
        self.0.try_contains(amount)
    }

    /// Closed-only containment between two ranges of the same currency.
    pub fn contains_range(&self, other: &Self) -> DomainResult<bool> {
        let own = self.currency()?;
        let given = other.currency()?;
        if let (Some(own), Some(given)) = (own, given) {
            if own != given {
                return Err(DomainError::CurrencyMismatch { left: own, right: given, site: MismatchSite::Ranges });
            }
        }
        self.0.try_contains_range(&other.0)
    }

    /// [`MoneyRange::contains_range`] for callers holding an arbitrary range type.
    pub fn contains_any<R: Any>(&self, other: &R) -> DomainResult<bool> {
        self.currency()?;
        let other = (other as &dyn Any).downcast_ref::<Self>().ok_or_else(|| DomainError::TypeMismatch {
            expected: type_name::<Self>(),
            found: type_name::<R>().to_string(),
        })?;
        self.contains_range(other)
    }
}

fn money_bound<T: Any>(bound: T) -> DomainResult<Money> {
    (&bound as &dyn Any).downcast_ref::<Money>().copied().ok_or_else(|| DomainError::TypeMismatch {
        expected: type_name::<Money>(),
        found: type_name::<T>().to_string(),
    })
}

impl From<Range<Money>> for MoneyRange {
    fn from(range: Range<Money>) -> Self {
        Self(range)
    }
}

impl From<MoneyRange> for Range<Money> {
    fn from(range: MoneyRange) -> Self {
        range.0
    }
}

macro_rules! currency_factories {
    ($($code:ident),+ $(,)?) => {
        paste::paste! {
            impl MoneyRange {
                $(
                    #[doc = concat!("Range in `", stringify!($code), "`; `None` leaves a side open.")]
                    pub fn [<of_ $code:lower>](min: Option<Decimal>, max: Option<Decimal>) -> Self {
                        Self::of_currency(CurrencyCode::$code, min, max)
                    }
                )+
            }
        }
    };
}

currency_factories!(PLN, USD, EUR, GBP, CHF, JPY, CZK);
