use error_lineage::{AnyError, Error, UnexpectedType};

#[test]
fn bare_error_renders_only_its_inner_error() {
    let err = Error::new("disk full");
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn cause_is_rendered_with_its_label_and_no_context_line() {
    let err = Error::new("save failed").with_cause("disk full");
    let text = err.to_string();

    assert_eq!(text, "save failed\nCause:  disk full");
    assert!(text.lines().any(|line| line == "Cause:  disk full"));
    assert!(!text.contains("Context:"));
}

#[test]
fn context_is_rendered_with_its_label_and_no_cause_line() {
    let err = Error::new("cleanup failed").with_context("request aborted");
    let text = err.to_string();

    assert_eq!(text, "cleanup failed\nContext:  request aborted");
    assert!(!text.contains("Cause:"));
}

#[test]
fn cause_comes_before_context() {
    let err = Error::new("a").with_context("c").with_cause("b");
    assert_eq!(err.to_string(), "a\nCause:  b\nContext:  c");
}

#[test]
fn nested_causes_render_in_chain_order() {
    let err = Error::new("outer").with_cause(Error::new("middle").with_cause("leaf"));
    assert_eq!(err.to_string(), "outer\nCause:  middle\nCause:  leaf");
}

#[test]
fn accessors_expose_every_part() {
    let err = Error::new("inner").with_cause("cause").with_context("context");

    assert_eq!(err.inner().to_string(), "inner");
    assert_eq!(err.cause().map(ToString::to_string).as_deref(), Some("cause"));
    assert_eq!(err.context().map(ToString::to_string).as_deref(), Some("context"));
    assert!(err.trace().is_none());
}

#[test]
fn create_records_a_trace_through_the_caller() {
    let err = Error::create("boom", None, None, 0);
    let trace = err.trace().expect("stack walking is available");

    assert!(!trace.is_empty());
    assert!(trace
        .frames()
        .iter()
        .any(|frame| frame.function.contains("create_records_a_trace_through_the_caller")));
    assert!(err.to_string().starts_with("boom\n"));
}

#[test]
fn create_keeps_cause_and_context() {
    let err = Error::create("boom", Some("why".into()), Some("while".into()), 0);
    let text = err.to_string();

    assert!(text.contains("\nCause:  why\n"));
    assert!(text.ends_with("\nContext:  while"));
}

#[test]
fn identical_shapes_match() {
    let err: AnyError = Error::new("a").with_cause("b").with_context("c").into();
    let same: AnyError = Error::new("a").with_cause("b").with_context("c").into();

    assert!(err.matches(&err));
    assert!(err.matches(&same));
    assert!(same.matches(&err));
}

#[test]
fn shapes_must_agree_on_cause_and_context() {
    let err: AnyError = Error::new("a").with_cause("b").into();

    assert!(!err.matches(&Error::new("a").with_cause("x").into()));
    assert!(!err.matches(&Error::new("a").into()));
    assert!(!err.matches(&Error::new("a").with_cause("b").with_context("c").into()));
}

#[test]
fn traces_are_ignored_when_matching() {
    let traced: AnyError = Error::create("a", Some("b".into()), None, 0).into();
    let bare: AnyError = Error::new("a").with_cause("b").into();

    assert!(traced.matches(&bare));
}

#[test]
fn matching_reaches_every_part_of_the_chain() {
    let err = Error::new("inner")
        .with_cause(Error::new("cause").with_cause("root"))
        .with_context("context");

    assert!(err.matches(&"inner".into()));
    assert!(err.matches(&"cause".into()));
    assert!(err.matches(&"root".into()));
    assert!(err.matches(&"context".into()));
    assert!(!err.matches(&"elsewhere".into()));
}

#[test]
fn opaque_leaves_match_by_identity_only() {
    let io = AnyError::leaf(std::io::Error::other("broken pipe"));
    let twin = AnyError::leaf(std::io::Error::other("broken pipe"));
    let err = Error::new("send failed").with_cause(io.clone());

    assert!(err.matches(&io));
    assert!(!err.matches(&twin));
}

#[test]
fn extract_as_returns_the_error_itself() {
    let err = Error::new("a").with_cause("b");
    let found = err.extract_as::<Error>().expect("an Error is an Error");
    assert!(std::ptr::eq(found, &err));
}

#[test]
fn extract_as_searches_inner_then_cause_then_context() {
    let err = Error::new("a")
        .with_cause(UnexpectedType::new(1u8, "one"))
        .with_context(UnexpectedType::new(2u8, "two"));

    let found = err.extract_as::<UnexpectedType>().expect("cause holds one");
    assert_eq!(found.actual().downcast_ref::<&str>(), Some(&"one"));
    assert!(err.extract_as::<std::io::Error>().is_none());
}

#[test]
fn extract_as_finds_context_when_cause_does_not_match() {
    let err = Error::new("a").with_cause("b").with_context(std::io::Error::other("eof"));
    let io = err.extract_as::<std::io::Error>().expect("context holds one");
    assert_eq!(io.to_string(), "eof");
}

#[test]
fn root_cause_follows_causes_only() {
    let err = Error::new("top")
        .with_cause(Error::new("middle").with_cause("bottom").with_context("ignored"))
        .with_context("also ignored");

    assert_eq!(err.root_cause().to_string(), "bottom");
    assert_eq!(Error::new("alone").root_cause().to_string(), "alone");
}

#[test]
fn formatted_strings_render_verbatim() {
    let err = Error::new(format!("bad state {:?}", std::collections::HashMap::<u8, u8>::new()));
    assert_eq!(err.to_string(), "bad state {}");

    let err = Error::new("retry").with_cause(String::from("expected }} got {"));
    assert_eq!(err.to_string(), "retry\nCause:  expected }} got {");
}
