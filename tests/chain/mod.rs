use error_lineage::{root_cause, wrap_deferred, AnyError, Error};

#[test]
fn empty_slot_and_successful_finalizer_stay_empty() {
    let mut slot: Option<AnyError> = None;
    wrap_deferred(&mut slot, || Ok::<(), AnyError>(()));
    assert!(slot.is_none());
}

#[test]
fn empty_slot_takes_the_finalizer_error_as_is() {
    let failure = AnyError::leaf(std::io::Error::other("close failed"));
    let mut slot: Option<AnyError> = None;

    wrap_deferred(&mut slot, || Err(failure.clone()));

    let err = slot.expect("finalizer failed");
    assert!(err.as_wrapped().is_none());
    assert!(err.matches(&failure));
}

#[test]
fn existing_error_becomes_the_context() {
    let mut slot: Option<AnyError> = Some("write failed".into());

    wrap_deferred(&mut slot, || Err("close failed"));

    let err = slot.unwrap();
    let wrapped = err.as_wrapped().expect("merged into a wrapped error");
    assert_eq!(wrapped.inner().to_string(), "close failed");
    assert_eq!(wrapped.context().unwrap().to_string(), "write failed");
    assert!(wrapped.cause().is_none());
    assert_eq!(err.to_string(), "close failed\nContext:  write failed");
}

#[test]
fn existing_error_survives_a_successful_finalizer() {
    let original = AnyError::from("write failed");
    let mut slot = Some(original.clone());

    wrap_deferred(&mut slot, || Ok::<(), &str>(()));

    assert!(slot.unwrap().matches(&original));
}

#[test]
fn repeated_deferred_failures_nest_as_contexts() {
    let mut slot: Option<AnyError> = Some("first".into());

    wrap_deferred(&mut slot, || Err("second"));
    wrap_deferred(&mut slot, || Err("third"));

    assert_eq!(slot.unwrap().to_string(), "third\nContext:  second\nContext:  first");
}

#[test]
fn root_cause_ignores_contexts() {
    let err: AnyError = Error::new("top")
        .with_context(Error::new("handling").with_cause("not a cause"))
        .into();

    assert_eq!(root_cause(&err).to_string(), "top");
}

#[test]
fn root_cause_walks_deep_chains() {
    let mut err = Error::new("level 0").with_cause("bottom");
    for level in 1..50 {
        err = Error::new(format!("level {level}")).with_cause(err);
    }

    assert_eq!(root_cause(&err.into()).to_string(), "bottom");
}

#[test]
fn root_cause_of_a_leaf_is_the_leaf() {
    let leaf = AnyError::from("plain");
    assert!(std::ptr::eq(root_cause(&leaf), &leaf));
}
