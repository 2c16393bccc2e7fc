// crates/shared-kernel/src/value_objects/money.rs
use std::{cmp::Ordering, fmt};

use rust_decimal::Decimal;

use super::CurrencyCode;
use crate::{
    compare::Comparable,
    error::{DomainError, DomainResult, MismatchSite},
};

/// Monetary amount tagged with its currency.
///
/// Amounts in different currencies are never ordered against each other:
/// `partial_cmp` yields `None` and [`Comparable::try_cmp`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money {
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    pub fn new(amount: impl Into<Decimal>, currency: CurrencyCode) -> Self {
        Self { amount: amount.into(), currency }
    }

    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[inline]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[inline]
    pub fn is_same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    pub fn ensure_same_currency(&self, other: &Self) -> DomainResult<()> {
        if self.is_same_currency(other) {
            Ok(())
        } else {
            Err(DomainError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
                site: MismatchSite::Amounts,
            })
        }
    }
}

macro_rules! currency_factories {
    ($($fn_name:ident => $code:ident),+ $(,)?) => {
        impl Money {
            $(
                #[doc = concat!("Amount tagged with `", stringify!($code), "`.")]
                pub fn $fn_name(amount: impl Into<Decimal>) -> Self {
                    Self::new(amount, CurrencyCode::$code)
                }
            )+
        }
    };
}

currency_factories!(
    of_pln => PLN,
    of_usd => USD,
    of_eur => EUR,
    of_gbp => GBP,
    of_chf => CHF,
    of_jpy => JPY,
    of_czk => CZK,
);

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.is_same_currency(other).then(|| self.amount.cmp(&other.amount))
    }
}

impl Comparable for Money {
    fn try_cmp(&self, other: &Self) -> DomainResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
