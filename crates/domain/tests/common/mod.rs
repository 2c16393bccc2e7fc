// crates/domain/tests/common/mod.rs
//! Shared fixtures for the domain integration tests.

#![allow(dead_code)]

use ddd_primitives_domain::restricted_enum;

restricted_enum! {
    /// Integer-backed enumeration mirroring the classic four-constant example.
    pub ExampleEnum: i64 {
        ONE = 1,
        TWO = 2,
        THREE = 3,
        TWO_WORDS = 4,
    }
}

restricted_enum! {
    /// String-backed enumeration that refuses the unset sentinel.
    pub PaymentMethod: &'static str where unset = false {
        BANK_TRANSFER = "transfer",
        CARD = "card",
        CASH_ON_DELIVERY = "cod",
    }
}

restricted_enum! {
    /// Two names bound to one value; reverse lookup must pick the first.
    pub Alias: u8 {
        PRIMARY = 1,
        LEGACY_PRIMARY = 1,
        SECONDARY = 2,
    }
}
