use crate::api_client::{AnalysisFilter, InterviewFilter, QueryString, ResumeFilter};

use models::InterviewStatus;

#[test]
fn given_no_values_when_rendered_then_suffix_is_empty() {
    let query = QueryString::new().push_id("job_id", None).push_str("status", None);

    assert!(query.is_empty());
    assert_eq!(query.to_suffix(), "");
    assert_eq!(query.append_to("/interviews"), "/interviews");
}

/// **VALUE**: Zero ids and empty strings are skipped like absent values.
///
/// **WHY THIS MATTERS**: The list screens pass `0` / `""` for "no filter".
/// Sending `job_id=0` would return an empty list instead of every record.
///
/// **BUG THIS CATCHES**: Would catch a filter that only checks `Option::is_some`.
#[test]
fn given_zero_id_and_empty_string_when_pushed_then_both_are_skipped() {
    let query = QueryString::new()
        .push_id("job_id", Some(0))
        .push_str("status", Some(""));

    assert!(query.is_empty());
}

#[test]
fn given_multiple_values_when_rendered_then_joined_in_push_order() {
    let query = QueryString::new()
        .push_id("job_id", Some(3))
        .push_id("resume_id", Some(12));

    assert_eq!(query.to_suffix(), "?job_id=3&resume_id=12");
}

/// **VALUE**: Values are percent-encoded, with spaces as `%20`.
///
/// **BUG THIS CATCHES**: Would catch raw interpolation (which breaks on `&`)
/// or form encoding leaking `+` for spaces.
#[test]
fn given_reserved_characters_when_rendered_then_values_are_percent_encoded() {
    let query = QueryString::new().push_str("status", Some("on hold & more"));

    assert_eq!(query.to_suffix(), "?status=on%20hold%20%26%20more");
}

#[test]
fn given_resume_filter_for_job_when_converted_then_emits_job_id() {
    assert_eq!(ResumeFilter::for_job(5).to_query().to_suffix(), "?job_id=5");
    assert!(ResumeFilter::default().to_query().is_empty());
}

#[test]
fn given_analysis_filter_with_resume_only_when_converted_then_emits_resume_id() {
    let filter = AnalysisFilter {
        job_id: None,
        resume_id: Some(9),
    };

    assert_eq!(filter.to_query().to_suffix(), "?resume_id=9");
}

#[test]
fn given_interview_filter_with_status_when_converted_then_uses_wire_value() {
    let filter = InterviewFilter {
        job_id: Some(1),
        resume_id: None,
        status: Some(InterviewStatus::Completed),
    };

    assert_eq!(filter.to_query().to_suffix(), "?job_id=1&status=completed");
}
