#![allow(clippy::multiple_crate_versions)]

pub mod enumeration;
pub mod value_objects;

pub use enumeration::{Enum, EnumDefinition};
pub use value_objects::{MoneyRange, Range};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
