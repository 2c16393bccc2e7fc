//! Restricted enumerations and money ranges as immutable domain value objects.
//!
//! ```
//! use ddd_primitives::prelude::*;
//!
//! restricted_enum! {
//!     pub Priority: u8 {
//!         LOW = 1,
//!         HIGH = 2,
//!     }
//! }
//!
//! assert_eq!(Priority::of_high().to_string(), "priority.high");
//!
//! let budget = MoneyRange::of_pln(Some(Decimal::from(100)), Some(Decimal::from(1000)));
//! assert!(budget.contains(&Money::of_pln(500)).unwrap());
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use ddd_primitives_domain::{self as domain, Enum, EnumDefinition, MoneyRange, Range, restricted_enum};
pub use ddd_primitives_shared_kernel::{
    self as shared_kernel, Comparable, CurrencyCode, Decimal, DomainError, DomainResult, ErrorContext, KernelError,
    MismatchSite, Money, Result,
};

pub mod prelude {
    pub use crate::{
        Comparable, CurrencyCode, Decimal, DomainError, DomainResult, Enum, EnumDefinition, Money, MoneyRange, Range,
        restricted_enum,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
