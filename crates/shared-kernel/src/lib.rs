// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{DomainError, DomainResult, ErrorContext, KernelError, MismatchSite, Result};

pub mod compare;
pub mod error;
pub mod inflector;
pub mod value_objects;

pub use compare::Comparable;
pub use value_objects::{CurrencyCode, Money};

pub use rust_decimal::Decimal;
