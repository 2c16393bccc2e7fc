// crates/domain/tests/enum_display.rs
mod common;

use common::{Alias, ExampleEnum, PaymentMethod};
use ddd_primitives_domain::Enum;
use ddd_primitives_shared_kernel::DomainError;

#[test]
fn converting_to_string() {
    assert_eq!(ExampleEnum::of_one().to_string(), "exampleEnum.one");
    assert_eq!(Enum::<ExampleEnum>::new(ExampleEnum::TWO_WORDS).unwrap().to_string(), "exampleEnum.twoWords");
    assert_eq!(Enum::<ExampleEnum>::unset().unwrap().to_string(), "");
}

#[test]
fn string_backed_values_render_constant_names() {
    assert_eq!(PaymentMethod::of_cash_on_delivery().to_string(), "paymentMethod.cashOnDelivery");
    assert_eq!(Alias::of_legacy_primary().to_string(), "alias.primary");
}

#[test]
fn unmatched_value_renders_empty_name_segment() {
    let value = Enum::<ExampleEnum>::new_unchecked(-1);
    assert_eq!(value.to_string(), "exampleEnum.");
}

#[test]
fn strict_token_rejects_unmatched_value() {
    let value = Enum::<ExampleEnum>::new_unchecked(-1);
    assert_eq!(
        value.display_token().unwrap_err(),
        DomainError::UnmatchedValue { type_name: "ExampleEnum", value: "-1".to_string() }
    );
    assert_eq!(ExampleEnum::of_two_words().display_token().unwrap(), "exampleEnum.twoWords");
    assert_eq!(Enum::<ExampleEnum>::unset().unwrap().display_token().unwrap(), "");
}
