use std::cell::Cell;

use error_lineage::traits::ResultExt;
use error_lineage::AnyError;

#[test]
fn caused_on_ok_is_a_no_op() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.caused("should not appear").unwrap(), 42);
}

#[test]
fn caused_moves_the_error_into_the_cause() {
    let result: Result<(), &str> = Err("connection refused");
    let err = result.caused("fetching profile").unwrap_err();

    assert_eq!(err.inner().to_string(), "fetching profile");
    assert!(err.cause().unwrap().matches(&"connection refused".into()));
    assert!(err.context().is_none());
    assert!(err.trace().is_some());
}

#[test]
fn caused_accepts_formatted_messages() {
    let user = 7;
    let result: Result<(), std::io::Error> = Err(std::io::Error::other("eof"));
    let err = result.caused(error_lineage::message!("loading user {}", user)).unwrap_err();

    assert_eq!(err.inner().to_string(), "loading user 7");
    assert!(err.extract_as::<std::io::Error>().is_some());
}

#[test]
fn caused_trace_starts_in_the_calling_function() {
    let result: Result<(), &str> = Err("x");
    let err = result.caused("y").unwrap_err();
    let frames = err.trace().unwrap().frames();

    assert!(frames
        .iter()
        .any(|frame| frame.function.contains("caused_trace_starts_in_the_calling_function")));
}

#[test]
fn while_handling_records_the_prior_error_as_context() {
    let result: Result<(), &str> = Err("rollback failed");
    let err = result.while_handling("commit failed").unwrap_err();

    assert_eq!(err.inner().to_string(), "rollback failed");
    assert_eq!(err.context().unwrap().to_string(), "commit failed");
    assert!(err.cause().is_none());
}

#[test]
fn finally_runs_the_finalizer_on_success() {
    let ran = Cell::new(false);
    let result: Result<u8, &str> = Ok(1);
    let value = result
        .finally(|| {
            ran.set(true);
            Ok::<(), &str>(())
        })
        .unwrap();

    assert!(ran.get());
    assert_eq!(value, 1);
}

#[test]
fn finally_reports_a_finalizer_failure_after_success() {
    let result: Result<u8, &str> = Ok(1);
    let err = result.finally(|| Err("close failed")).unwrap_err();

    assert_eq!(err.to_string(), "close failed");
    assert!(err.as_wrapped().is_none());
}

#[test]
fn finally_keeps_the_original_error_when_the_finalizer_succeeds() {
    let result: Result<u8, &str> = Err("write failed");
    let err = result.finally(|| Ok::<(), AnyError>(())).unwrap_err();

    assert_eq!(err.to_string(), "write failed");
}

#[test]
fn finally_preserves_the_original_error_as_context() {
    let result: Result<u8, &str> = Err("write failed");
    let err = result.finally(|| Err("close failed")).unwrap_err();

    let wrapped = err.as_wrapped().expect("merged into a wrapped error");
    assert_eq!(wrapped.inner().to_string(), "close failed");
    assert!(wrapped.context().unwrap().matches(&"write failed".into()));
    assert!(wrapped.trace().is_none());
}

#[test]
fn caused_keeps_formatted_text_verbatim() {
    let result: Result<(), &str> = Err("not found");
    let err = result.caused(format!("loading {}", "cfg{0}.toml")).unwrap_err();

    assert_eq!(err.inner().to_string(), "loading cfg{0}.toml");
    assert_eq!(err.to_string().lines().next(), Some("loading cfg{0}.toml"));
}

#[test]
fn while_handling_trace_starts_in_the_calling_function() {
    let result: Result<(), &str> = Err("x");
    let err = result.while_handling("y").unwrap_err();
    let frames = err.trace().unwrap().frames();

    assert!(frames.iter().any(|frame| {
        frame.function.contains("while_handling_trace_starts_in_the_calling_function")
    }));
    assert!(frames.iter().all(|frame| !frame.function.contains("ResultExt")));
}
