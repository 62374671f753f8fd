use super::{ApiClient, ApiRequest};
use crate::error::ApiClientError;

use models::{Job, JobCreate, JobUpdate, OkResponse};

pub const JOBS_PATH: &str = "/jobs";

fn job_path(id: i64) -> String {
    format!("{JOBS_PATH}/{id}")
}

impl ApiClient {
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ApiClientError> {
        self.execute_as(&ApiRequest::get(JOBS_PATH)).await
    }

    pub async fn get_job(&self, id: i64) -> Result<Job, ApiClientError> {
        self.execute_as(&ApiRequest::get(job_path(id))).await
    }

    pub async fn create_job(&self, job: &JobCreate) -> Result<Job, ApiClientError> {
        self.execute_as(&ApiRequest::post(JOBS_PATH).json(job)?)
            .await
    }

    pub async fn update_job(&self, id: i64, update: &JobUpdate) -> Result<Job, ApiClientError> {
        self.execute_as(&ApiRequest::put(job_path(id)).json(update)?)
            .await
    }

    pub async fn delete_job(&self, id: i64) -> Result<OkResponse, ApiClientError> {
        self.execute_as(&ApiRequest::delete(job_path(id))).await
    }
}
