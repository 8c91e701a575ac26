use mshop_derive::mshop_error;
use std::borrow::Cow;

#[mshop_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Validation failed{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk gone");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = failing_io().context("Reading order export").unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading order export): disk gone");
}

#[test]
fn context_replaces_previous_context() {
    let first: Result<(), SampleError> = Err(SampleError::Validation {
        message: "code is empty".into(),
        context: Some("first".into()),
    });

    let err = first.context("second").unwrap_err();
    assert_eq!(err.to_string(), "Validation failed (second): code is empty");
}

#[test]
fn strings_convert_into_internal_variant() {
    let borrowed: SampleError = "static message".into();
    let owned: SampleError = format!("owned {}", 42).into();

    assert!(matches!(borrowed, SampleError::Internal { message: Cow::Borrowed(_), .. }));
    assert_eq!(owned.to_string(), "Internal error: owned 42");
}
