use std::path::Path;

use error_lineage::advanced::{Frame, INLINE_FRAMES};
use error_lineage::{errorf, ConfigError, Error, Trace, TraceConfig};

#[inline(never)]
fn nested(depth: usize) -> Error {
    if depth == 0 {
        errorf!("deep failure")
    } else {
        std::hint::black_box(nested(depth - 1))
    }
}

#[test]
fn deep_stacks_are_recorded_in_full() {
    let depth = INLINE_FRAMES + 16;
    let err = nested(depth);
    let trace = err.trace().expect("stack walking is available");

    assert!(trace.len() > depth);
    let recursive = trace
        .frames()
        .iter()
        .filter(|frame| frame.function.ends_with("nested"))
        .count();
    assert_eq!(recursive, depth + 1);
}

#[test]
fn frames_render_function_then_location() {
    let frame = Frame {
        function: "app::load".to_string(),
        file: Some("src/app.rs".to_string()),
        line: Some(12),
    };
    assert_eq!(frame.to_string(), "app::load\n\tsrc/app.rs:12");

    let unknown = Frame { function: "app::load".to_string(), file: None, line: None };
    assert_eq!(unknown.to_string(), "app::load\n\t<unknown>");
}

#[test]
fn error_text_lists_frames_after_the_inner_error() {
    let err = errorf!("boom");
    let trace = err.trace().unwrap();
    let text = err.to_string();

    assert_eq!(text, format!("boom\n{trace}"));
    assert_eq!(text.lines().filter(|line| line.starts_with('\t')).count(), trace.frames().len());
}

#[test]
fn root_prefix_is_stripped_from_paths() {
    let config = TraceConfig::new().with_root_prefix(env!("CARGO_MANIFEST_DIR"));
    assert_eq!(
        config.shorten(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/trace/mod.rs"))),
        Path::new("tests/trace/mod.rs")
    );

    let err = errorf!("boom");
    let frames = err.trace().unwrap().frames_with(&config);
    let here = frames
        .iter()
        .find(|frame| frame.function.contains("root_prefix_is_stripped_from_paths"))
        .expect("calling function is recorded");
    assert!(!here.file.as_deref().unwrap_or_default().starts_with(env!("CARGO_MANIFEST_DIR")));
}

#[test]
fn max_frames_limits_rendering_only() {
    let err = nested(4);
    let trace = err.trace().unwrap();
    let config = TraceConfig::new().with_max_frames(2);

    assert_eq!(trace.frames_with(&config).len(), 2);
    assert_eq!(trace.display_with(&config).to_string().lines().count(), 4);
    assert!(trace.len() > 2);
}

#[test]
fn bare_errors_have_no_trace_section() {
    assert!(Error::new("bare").trace().is_none());
    assert_eq!(Error::new("bare").to_string(), "bare");
}

#[test]
fn capture_from_here_starts_at_this_function() {
    let trace = Trace::capture(0).unwrap();
    let first = trace.frames().into_iter().next().expect("at least one frame");
    assert!(first.function.contains("capture_from_here_starts_at_this_function"));
}

#[test]
fn configuration_installs_only_once() {
    let _ = TraceConfig::from_env().install();
    assert_eq!(TraceConfig::new().install(), Err(ConfigError::AlreadyInstalled));
    assert_eq!(
        ConfigError::AlreadyInstalled.to_string(),
        "trace configuration is already installed"
    );
}
