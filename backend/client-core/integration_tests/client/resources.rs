use super::helpers::{api_path, client_for, store_with};

use client_core::{AnalysisFilter, InterviewFilter, ResumeFilter};
use models::{AnalysisCreate, InterviewStatus, InterviewUpdate, JobStatus, JobUpdate};

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn job_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "department": "Engineering",
        "description": "",
        "requiredSkills": ["Rust"],
        "niceToHave": [],
        "status": "open",
        "createdAt": "2025-01-01T00:00:00",
        "experienceLevel": "2-3",
        "education": "Bachelor",
        "aiResumeMatchingEnabled": true,
        "aiQuestionGenEnabled": false
    })
}

fn interview_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "jobId": 1,
        "resumeId": 2,
        "scheduledAt": null,
        "status": status,
        "interviewRound": "first",
        "interviewer": "Lee",
        "meetingLink": "",
        "location": "Room 3",
        "notes": "",
        "decision": "",
        "rating": null,
        "createdAt": "2025-01-01T00:00:00",
        "updatedAt": "2025-01-01T00:00:00",
        "jobTitle": "Backend",
        "candidateName": "Chen"
    })
}

#[tokio::test]
async fn given_jobs_endpoint_when_listed_then_typed_jobs_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([job_json(1, "Backend"), job_json(2, "QA")])),
        )
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let jobs = client.list_jobs().await.unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].title, "Backend");
    assert_eq!(jobs[0].status, JobStatus::Open);
    assert_eq!(jobs[0].required_skills, vec!["Rust".to_string()]);
}

/// **VALUE**: Partial updates send only the fields that were set.
///
/// **WHY THIS MATTERS**: The API treats an explicit `null` as "clear this
/// field". Sending every `None` would wipe data on each edit.
///
/// **BUG THIS CATCHES**: Would catch `skip_serializing_if` being dropped from
/// the update payloads.
#[tokio::test]
async fn given_partial_job_update_when_sent_then_only_set_fields_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/jobs/7")))
        .and(body_json(json!({"status": "closed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json(7, "Backend")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let update = JobUpdate {
        status: Some(JobStatus::Closed),
        ..JobUpdate::default()
    };
    let job = client.update_job(7, &update).await.unwrap();

    assert_eq!(job.id, 7);
}

#[tokio::test]
async fn given_missing_job_when_fetched_then_not_found_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/jobs/99")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Job not found"})))
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let err = client.get_job(99).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.failure().unwrap().display_detail(), "Job not found");
}

#[tokio::test]
async fn given_delete_when_acknowledged_then_ok_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/jobs/3")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    assert!(client.delete_job(3).await.unwrap().ok);
}

/// **VALUE**: List filters become query parameters, and unset ones are omitted.
///
/// **BUG THIS CATCHES**: Would catch `job_id=` with an empty value, or a filter
/// that never reaches the URL.
#[tokio::test]
async fn given_resume_filter_when_listed_then_job_id_query_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/resumes")))
        .and(query_param("job_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("/resumes")))
        .and(query_param_is_missing("job_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    client
        .list_resumes(&ResumeFilter::for_job(4))
        .await
        .unwrap();
    client.list_resumes(&ResumeFilter::default()).await.unwrap();
}

#[tokio::test]
async fn given_interview_filter_when_listed_then_all_set_filters_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/interviews")))
        .and(query_param("resume_id", "2"))
        .and(query_param("status", "scheduled"))
        .and(query_param_is_missing("job_id"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([interview_json(5, "scheduled")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let filter = InterviewFilter {
        job_id: Some(0),
        resume_id: Some(2),
        status: Some(InterviewStatus::Scheduled),
    };
    let interviews = client.list_interviews(&filter).await.unwrap();

    assert_eq!(interviews.len(), 1);
    assert_eq!(interviews[0].candidate_name.as_deref(), Some("Chen"));
    assert_eq!(interviews[0].status.display_label(), "已排程");
}

#[tokio::test]
async fn given_interview_update_when_sent_then_returns_updated_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/interviews/5")))
        .and(body_json(json!({"status": "completed", "rating": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(interview_json(5, "completed")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let update = InterviewUpdate {
        status: Some(InterviewStatus::Completed),
        rating: Some(Some(4)),
        ..InterviewUpdate::default()
    };
    let interview = client.update_interview(5, &update).await.unwrap();

    assert_eq!(interview.status, InterviewStatus::Completed);
}

#[tokio::test]
async fn given_analysis_request_when_created_then_camel_case_body_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("/ai-analyses")))
        .and(body_json(json!({"jobId": 1, "resumeId": 2, "force": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "jobId": 1,
            "resumeId": 2,
            "createdAt": "2025-01-01T00:00:00",
            "model": "mock",
            "promptVersion": "v1",
            "overallScore": 80,
            "professionalScore": 85,
            "communicationScore": 70,
            "problemSolvingScore": 75,
            "summary": "Solid backend fit",
            "strengths": ["Rust"],
            "risks": [],
            "suggestedQuestions": ["Describe an outage you handled"],
            "isMock": true,
            "rawResponse": {"source": "mock"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let analysis = client
        .create_analysis(&AnalysisCreate {
            job_id: 1,
            resume_id: 2,
            force: Some(true),
        })
        .await
        .unwrap();

    assert_eq!(analysis.overall_score, 80);
    assert!(analysis.is_mock);
    assert_eq!(analysis.raw_response.get("source"), Some(&json!("mock")));
}

#[tokio::test]
async fn given_analysis_filter_when_listed_then_both_ids_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("/ai-analyses")))
        .and(query_param("job_id", "1"))
        .and(query_param("resume_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server, store_with("access-1", None));

    let filter = AnalysisFilter {
        job_id: Some(1),
        resume_id: Some(2),
    };

    assert!(client.list_analyses(&filter).await.unwrap().is_empty());
}
