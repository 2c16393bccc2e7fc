// crates/shared-kernel/tests/currency_code.rs
use ddd_primitives_shared_kernel::{CurrencyCode, DomainError};

#[test]
fn lowercase_input_is_normalised() {
    assert_eq!(CurrencyCode::new("usd").unwrap(), CurrencyCode::USD);
    assert_eq!("pLn".parse::<CurrencyCode>().unwrap(), CurrencyCode::PLN);
}

#[test]
fn display_is_the_bare_code() {
    assert_eq!(CurrencyCode::EUR.to_string(), "EUR");
    assert_eq!(CurrencyCode::new("nok").unwrap().as_str(), "NOK");
}

#[test]
fn rejects_anything_but_three_letters() {
    for bad in ["", "US", "USDT", "U5D", "ŁZŁ", "   "] {
        let err = CurrencyCode::new(bad).unwrap_err();
        assert_eq!(err, DomainError::InvalidCurrencyCode { code: bad.to_string() });
    }
}
