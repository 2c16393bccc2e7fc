// crates/shared-kernel/src/value_objects/mod.rs
pub mod currency;
pub mod money;

pub use currency::CurrencyCode;
pub use money::Money;
