// crates/domain/tests/enum_construction.rs
mod common;

use common::{ExampleEnum, PaymentMethod};
use ddd_primitives_domain::Enum;
use ddd_primitives_shared_kernel::DomainError;

#[test]
fn construct_valid_value() {
    let value = Enum::<ExampleEnum>::new(ExampleEnum::ONE).expect("declared value");
    assert_eq!(value.get(), Some(&1));
}

#[test]
fn construct_with_default_value_is_unset() {
    let value = Enum::<ExampleEnum>::unset().expect("unset is declared by default");
    assert!(value.is_unset());
    assert_eq!(value.get(), None);
    assert_eq!(value, Enum::<ExampleEnum>::with_validation(None, true).unwrap());
}

#[test]
fn construct_invalid_value_fails() {
    let err = Enum::<ExampleEnum>::new(-1).unwrap_err();
    assert_eq!(err, DomainError::InvalidValue { type_name: "ExampleEnum", value: "-1".to_string() });
    assert_eq!(err.to_string(), "Given value \"-1\" is invalid for ExampleEnum");
}

#[test]
fn construct_invalid_value_without_validation() {
    let value = Enum::<ExampleEnum>::with_validation(Some(-1), false).expect("validation skipped");
    assert_eq!(value.get(), Some(&-1));
    assert_eq!(Enum::<ExampleEnum>::new_unchecked(-1), value);
}

#[test]
fn unset_can_be_excluded_from_the_declared_set() {
    let err = Enum::<PaymentMethod>::unset().unwrap_err();
    assert_eq!(err, DomainError::InvalidValue { type_name: "PaymentMethod", value: "null".to_string() });
    assert!(Enum::<PaymentMethod>::with_validation(None, false).unwrap().is_unset());
}

#[test]
fn named_factory_equals_direct_construction() {
    assert_eq!(ExampleEnum::of_one(), Enum::<ExampleEnum>::new(ExampleEnum::ONE).unwrap());
    assert_eq!(ExampleEnum::of_two_words(), Enum::new(4).unwrap());
    assert!(PaymentMethod::of_card().is(&"card"));
}

#[test]
fn runtime_factory_resolves_declared_constants() {
    assert_eq!(Enum::<ExampleEnum>::of("THREE").unwrap(), ExampleEnum::of_three());
    assert_eq!(Enum::<PaymentMethod>::of("CASH_ON_DELIVERY").unwrap().get(), Some(&"cod"));
}

#[test]
fn runtime_factory_rejects_undeclared_constant() {
    let err = Enum::<ExampleEnum>::of("NON_EXISTENT").unwrap_err();
    assert_eq!(
        err,
        DomainError::UnknownConstant { constant: "NON_EXISTENT".to_string(), type_name: "ExampleEnum" }
    );
    assert_eq!(err.to_string(), "Undefined class constant \"NON_EXISTENT\" in \"ExampleEnum\"");

    // Constant names are case sensitive.
    assert!(Enum::<ExampleEnum>::of("one").is_err());
}
