use super::{ApiClient, ApiRequest, QueryString};
use crate::error::ApiClientError;

use models::{Resume, ResumeCreate};

pub const RESUMES_PATH: &str = "/resumes";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResumeFilter {
    pub job_id: Option<i64>,
}

impl ResumeFilter {
    pub fn for_job(job_id: i64) -> Self {
        Self {
            job_id: Some(job_id),
        }
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::new().push_id("job_id", self.job_id)
    }
}

impl ApiClient {
    pub async fn list_resumes(&self, filter: &ResumeFilter) -> Result<Vec<Resume>, ApiClientError> {
        let path = filter.to_query().append_to(RESUMES_PATH);
        self.execute_as(&ApiRequest::get(path)).await
    }

    pub async fn get_resume(&self, id: i64) -> Result<Resume, ApiClientError> {
        self.execute_as(&ApiRequest::get(format!("{RESUMES_PATH}/{id}")))
            .await
    }

    pub async fn create_resume(&self, resume: &ResumeCreate) -> Result<Resume, ApiClientError> {
        self.execute_as(&ApiRequest::post(RESUMES_PATH).json(resume)?)
            .await
    }
}
