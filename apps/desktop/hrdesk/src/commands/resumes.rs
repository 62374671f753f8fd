use super::map_api_error;
use crate::error::HrDeskError;
use crate::state::AppState;

use client_core::ResumeFilter;
use models::{Resume, ResumeCreate};

use log::{debug, info};

pub async fn list_resumes(
    state: &AppState,
    job_id: Option<i64>,
) -> Result<Vec<Resume>, HrDeskError> {
    debug!("Listing resumes (job filter: {job_id:?})");

    match state.client().list_resumes(&ResumeFilter { job_id }).await {
        Ok(resumes) => Ok(resumes),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn get_resume(state: &AppState, id: i64) -> Result<Resume, HrDeskError> {
    match state.client().get_resume(id).await {
        Ok(resume) => Ok(resume),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn create_resume(state: &AppState, resume: &ResumeCreate) -> Result<Resume, HrDeskError> {
    match state.client().create_resume(resume).await {
        Ok(created) => {
            info!("Submitted resume {} for job {}", created.id, created.job_id);
            Ok(created)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}
