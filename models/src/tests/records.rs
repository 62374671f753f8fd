// Wire-format checks against the HR API's camelCase JSON.

use crate::{
    AiAnalysis, AuthTokens, InterviewStatus, InterviewUpdate, Job, JobStatus, JobUpdate,
    RefreshRequest, Resume, ResumeStatus,
};

use serde_json::json;

/// **VALUE**: Verifies a job body from the API deserializes with camelCase names.
///
/// **WHY THIS MATTERS**: The API uses camelCase aliases; a missed rename makes every
/// job list call fail with a JSON error.
#[test]
fn given_api_job_json_when_deserialized_then_fields_map() {
    // GIVEN: A job as served by the API
    let body = json!({
        "id": 7,
        "title": "Backend Engineer",
        "department": "R&D",
        "description": "Build services",
        "requiredSkills": ["Rust", "SQL"],
        "niceToHave": ["Kafka"],
        "status": "closed",
        "createdAt": "2024-05-01T00:00:00",
        "experienceLevel": "4-6",
        "education": "大學",
        "aiResumeMatchingEnabled": true,
        "aiQuestionGenEnabled": false
    });

    // WHEN
    let job: Job = serde_json::from_value(body).expect("job should parse");

    // THEN
    assert_eq!(job.id, 7);
    assert_eq!(job.required_skills, vec!["Rust", "SQL"]);
    assert_eq!(job.status, JobStatus::Closed);
    assert!(!job.ai_question_gen_enabled);
}

/// **VALUE**: Verifies partial updates only send the fields that were set.
///
/// **WHY THIS MATTERS**: Sending `null` for untouched fields would wipe them on
/// the server side.
#[test]
fn given_partial_job_update_when_serialized_then_unset_fields_are_omitted() {
    let update = JobUpdate {
        title: Some(String::from("Staff Engineer")),
        status: Some(JobStatus::Open),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();

    assert_eq!(value, json!({"title": "Staff Engineer", "status": "open"}));
}

#[test]
fn given_resume_without_optional_fields_when_deserialized_then_defaults_apply() {
    let body = json!({
        "id": 3,
        "candidateName": "Lin",
        "jobId": 7,
        "resumeText": "…",
        "status": "analyzed",
        "submittedAt": "2024-05-02T00:00:00"
    });

    let resume: Resume = serde_json::from_value(body).expect("resume should parse");

    assert_eq!(resume.status, ResumeStatus::Analyzed);
    assert!(resume.ai_match_score.is_none());
    assert!(resume.match_highlights.is_empty());
    assert_eq!(resume.years_exp, 0);
}

#[test]
fn given_analysis_json_when_deserialized_then_scores_and_raw_response_map() {
    let body = json!({
        "id": 1,
        "jobId": 7,
        "resumeId": 3,
        "createdAt": "2024-05-02T00:00:00",
        "model": "gemini",
        "promptVersion": "v1",
        "overallScore": 82,
        "professionalScore": 80,
        "communicationScore": 75,
        "problemSolvingScore": 90,
        "summary": "Strong fit",
        "strengths": ["Rust"],
        "risks": [],
        "suggestedQuestions": ["Tell me about ownership"],
        "isMock": true,
        "rawResponse": {"tokens": 120}
    });

    let analysis: AiAnalysis = serde_json::from_value(body).expect("analysis should parse");

    assert_eq!(analysis.problem_solving_score, 90);
    assert!(analysis.is_mock);
    assert_eq!(analysis.raw_response.get("tokens"), Some(&json!(120)));
}

#[test]
fn given_interview_update_when_serialized_then_uses_camel_case() {
    let update = InterviewUpdate {
        status: Some(InterviewStatus::Canceled),
        meeting_link: Some(String::from("https://meet.example/abc")),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();

    assert_eq!(
        value,
        json!({"status": "canceled", "meetingLink": "https://meet.example/abc"})
    );
}

/// **VALUE**: An update can clear a nullable field, not just leave it alone.
///
/// **WHY THIS MATTERS**: The edit form unschedules an interview or removes its
/// rating by sending `null`. The backend only touches keys that are present.
///
/// **BUG THIS CATCHES**: Would catch "clear" and "unchanged" collapsing into
/// the same omitted key, silently keeping the old rating.
#[test]
fn given_cleared_rating_when_update_serialized_then_null_sent_and_unset_omitted() {
    // GIVEN: An update clearing the rating and leaving the schedule unchanged
    let update = InterviewUpdate {
        notes: Some(String::from("n")),
        rating: Some(None),
        scheduled_at: None,
        ..Default::default()
    };

    // WHEN: Serializing the update
    let value = serde_json::to_value(&update).unwrap();

    // THEN: rating is an explicit null and scheduledAt is absent
    assert_eq!(value, json!({"notes": "n", "rating": null}));
    assert!(value.get("scheduledAt").is_none());
}

#[test]
fn given_update_json_with_null_schedule_when_deserialized_then_cleared_not_unset() {
    let update: InterviewUpdate =
        serde_json::from_value(json!({"scheduledAt": null, "rating": 3})).unwrap();

    assert_eq!(update.scheduled_at, Some(None));
    assert_eq!(update.rating, Some(Some(3)));
    assert_eq!(update.notes, None);
}

/// **VALUE**: Verifies the refresh response shape, including an omitted refresh token.
///
/// **WHY THIS MATTERS**: The refresh flow depends on reading `accessToken` and an
/// optional `refreshToken` from this body.
#[test]
fn given_token_response_without_refresh_when_deserialized_then_refresh_is_none() {
    let tokens: AuthTokens =
        serde_json::from_value(json!({"accessToken": "new"})).expect("tokens should parse");

    assert_eq!(tokens.access_token, "new");
    assert!(tokens.refresh_token.is_none());
    assert!(!format!("{tokens:?}").contains("\"new\""));
}

#[test]
fn given_refresh_request_when_serialized_then_sends_refresh_token_key() {
    let value = serde_json::to_value(RefreshRequest {
        refresh_token: "r-1",
    })
    .unwrap();

    assert_eq!(value, json!({"refreshToken": "r-1"}));
}

#[test]
fn given_status_enums_when_labelled_then_match_ui_labels() {
    assert_eq!(JobStatus::Open.display_label(), "招募中");
    assert_eq!(ResumeStatus::Interviewed.display_label(), "已面試");
    assert_eq!(InterviewStatus::Completed.as_str(), "completed");
}
