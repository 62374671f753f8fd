use crate::api_client::payload::{extract_detail, parse_safely};

use serde_json::{Value, json};

/// **VALUE**: An empty response body becomes `null` instead of a parse error.
///
/// **WHY THIS MATTERS**: DELETE and some error responses carry no body. Treating
/// that as malformed JSON would turn a successful delete into a failure.
///
/// **BUG THIS CATCHES**: Would catch a refactor that feeds empty text straight
/// into `serde_json::from_str`, which rejects it.
#[test]
fn given_empty_body_when_parsed_then_yields_null() {
    assert_eq!(parse_safely(""), Value::Null);
}

#[test]
fn given_json_body_when_parsed_then_yields_structured_value() {
    let payload = parse_safely(r#"{"id": 7, "title": "Backend"}"#);

    assert_eq!(payload, json!({"id": 7, "title": "Backend"}));
}

/// **VALUE**: Non-JSON bodies (proxy error pages, plain text) are kept verbatim.
///
/// **WHY THIS MATTERS**: The raw text is the only diagnostic the user gets when
/// a reverse proxy answers instead of the API.
///
/// **BUG THIS CATCHES**: Would catch a parse failure being propagated as an
/// error or the body being silently replaced by `null`.
#[test]
fn given_plain_text_body_when_parsed_then_keeps_raw_text() {
    let payload = parse_safely("Bad Gateway");

    assert_eq!(payload, Value::String("Bad Gateway".to_string()));
}

#[test]
fn given_object_with_detail_when_extracted_then_returns_detail_only() {
    let payload = json!({"detail": "Job not found", "code": 404});

    assert_eq!(extract_detail(&payload), json!("Job not found"));
}

/// **VALUE**: Validation errors keep their structured `detail` array.
///
/// **BUG THIS CATCHES**: Would catch `extract_detail` stringifying or
/// flattening non-string details.
#[test]
fn given_structured_detail_when_extracted_then_structure_is_preserved() {
    let payload = json!({"detail": [{"loc": ["body", "title"], "msg": "field required"}]});

    let detail = extract_detail(&payload);

    assert_eq!(detail[0]["msg"], json!("field required"));
}

#[test]
fn given_payload_without_detail_when_extracted_then_returns_whole_payload() {
    let object = json!({"error": "boom"});
    let text = Value::String("Internal Server Error".to_string());

    assert_eq!(extract_detail(&object), object);
    assert_eq!(extract_detail(&text), text);
    assert_eq!(extract_detail(&Value::Null), Value::Null);
}
