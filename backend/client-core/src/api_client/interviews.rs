use super::{ApiClient, ApiRequest, QueryString};
use crate::error::ApiClientError;

use models::{Interview, InterviewCreate, InterviewStatus, InterviewUpdate, OkResponse};

pub const INTERVIEWS_PATH: &str = "/interviews";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterviewFilter {
    pub job_id: Option<i64>,
    pub resume_id: Option<i64>,
    pub status: Option<InterviewStatus>,
}

impl InterviewFilter {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_id("job_id", self.job_id)
            .push_id("resume_id", self.resume_id)
            .push_str("status", self.status.as_ref().map(InterviewStatus::as_str))
    }
}

fn interview_path(id: i64) -> String {
    format!("{INTERVIEWS_PATH}/{id}")
}

impl ApiClient {
    pub async fn list_interviews(
        &self,
        filter: &InterviewFilter,
    ) -> Result<Vec<Interview>, ApiClientError> {
        let path = filter.to_query().append_to(INTERVIEWS_PATH);
        self.execute_as(&ApiRequest::get(path)).await
    }

    pub async fn get_interview(&self, id: i64) -> Result<Interview, ApiClientError> {
        self.execute_as(&ApiRequest::get(interview_path(id))).await
    }

    pub async fn create_interview(
        &self,
        interview: &InterviewCreate,
    ) -> Result<Interview, ApiClientError> {
        self.execute_as(&ApiRequest::post(INTERVIEWS_PATH).json(interview)?)
            .await
    }

    pub async fn update_interview(
        &self,
        id: i64,
        update: &InterviewUpdate,
    ) -> Result<Interview, ApiClientError> {
        self.execute_as(&ApiRequest::put(interview_path(id)).json(update)?)
            .await
    }

    pub async fn delete_interview(&self, id: i64) -> Result<OkResponse, ApiClientError> {
        self.execute_as(&ApiRequest::delete(interview_path(id)))
            .await
    }
}
