use mshop_logger::{Logger, LoggerError};

#[test]
fn second_init_reports_installed_subscriber() {
    let _first = Logger::builder().name("mshop-first").init().expect("first init");

    let err = Logger::builder().name("mshop-second").init().expect_err("subscriber already set");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
    assert!(err.to_string().starts_with("Tracing subscriber error"));
}
