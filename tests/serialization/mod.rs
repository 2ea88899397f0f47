use error_lineage::{errorf, AnyError, Error, Errors};
use serde_json::json;

#[test]
fn leaves_serialize_as_their_text() {
    let err = AnyError::from("disk full");
    assert_eq!(serde_json::to_value(&err).unwrap(), json!("disk full"));
}

#[test]
fn wrapped_errors_serialize_present_parts_only() {
    let err = Error::new("save failed").with_cause("disk full");
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({ "message": "save failed", "cause": "disk full" })
    );

    let err = Error::new("cleanup failed")
        .with_cause(Error::new("unlink failed").with_cause("busy"))
        .with_context("aborted");
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({
            "message": "cleanup failed",
            "cause": { "message": "unlink failed", "cause": "busy" },
            "context": "aborted",
        })
    );
}

#[test]
fn aggregates_serialize_with_their_count() {
    let all = Errors::aggregate([AnyError::from("a"), Error::new("b").with_context("c").into()])
        .unwrap();
    assert_eq!(
        serde_json::to_value(&all).unwrap(),
        json!({
            "count": 2,
            "errors": ["a", { "message": "b", "context": "c" }],
        })
    );
}

#[test]
fn traces_serialize_as_resolved_frames() {
    let err = errorf!("boom");
    let value = serde_json::to_value(&err).unwrap();

    let frames = value["trace"].as_array().expect("trace is recorded");
    assert!(!frames.is_empty());
    assert!(frames.iter().any(|frame| frame["function"]
        .as_str()
        .is_some_and(|name| name.contains("traces_serialize_as_resolved_frames"))));
}
