// crates/domain/tests/logging.rs
mod common;

use common::ExampleEnum;
use ddd_primitives_domain::{Enum, Range};

#[test]
fn events_are_emitted_without_affecting_results() {
    let _ = tracing_subscriber::fmt().with_env_filter("trace").with_test_writer().try_init();

    let unchecked = Enum::<ExampleEnum>::new_unchecked(99);
    assert_eq!(unchecked.get(), Some(&99));
    assert!(!Range::new(Some(1), None).contains_range(&Range::new(Some(1), Some(2))));
}
