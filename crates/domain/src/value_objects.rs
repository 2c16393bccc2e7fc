//! Range value objects.

pub mod money_range;
pub mod range;

pub use money_range::MoneyRange;
pub use range::Range;
