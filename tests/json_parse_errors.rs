//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by document parse diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.

use serde_json::Value;
use shape_tolerant::api::{
    Decoders, ErrorKind, ParseFailureCategory, categorize_error, hint_for_error,
};
use shape_tolerant::json::parse;

#[test]
fn category_mapping_handles_syntax_eof_and_data_errors() {
    let syntax_err = parse::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(categorize_error(&syntax_err), ParseFailureCategory::Syntax);

    let eof_err = parse::from_str::<Value>(r#"[1, 2"#).unwrap_err();
    assert_eq!(categorize_error(&eof_err), ParseFailureCategory::Eof);

    let data_err = parse::from_str::<Vec<u32>>(r#"["x"]"#).unwrap_err();
    assert_eq!(categorize_error(&data_err), ParseFailureCategory::Data);
}

#[test]
fn category_mapping_handles_depth_limit() {
    let depth = 256usize;
    let mut payload = String::with_capacity(depth * 2 + 1);
    for _ in 0..depth {
        payload.push('[');
    }
    payload.push('0');
    for _ in 0..depth {
        payload.push(']');
    }
    let err = parse::from_str::<Value>(&payload).unwrap_err();
    assert_eq!(categorize_error(&err), ParseFailureCategory::DepthLimit);

    assert_eq!(
        parse::categorize_message("recursion limit exceeded while parsing"),
        ParseFailureCategory::DepthLimit
    );
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_slice::<Value>(br#"{"n":tru}"#).unwrap_err();
    let hint = hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: syntax"));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
    assert_eq!(ParseFailureCategory::Unknown.label(), "unknown");
}

#[test]
fn malformed_document_never_reaches_the_strategy() {
    let mut decoders = Decoders::new();
    decoders.register_sequence::<u32>();
    let err = decoders.decode_str::<Vec<u32>>("{\"a\": 1,").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("parse category: eof"));
}
