use super::map_api_error;
use crate::error::HrDeskError;
use crate::state::AppState;

use models::{Job, JobCreate, JobUpdate, OkResponse};

use log::{debug, info};

pub async fn list_jobs(state: &AppState) -> Result<Vec<Job>, HrDeskError> {
    debug!("Listing jobs");

    match state.client().list_jobs().await {
        Ok(jobs) => {
            debug!("Fetched {} jobs", jobs.len());
            Ok(jobs)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn get_job(state: &AppState, id: i64) -> Result<Job, HrDeskError> {
    match state.client().get_job(id).await {
        Ok(job) => Ok(job),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn create_job(state: &AppState, job: &JobCreate) -> Result<Job, HrDeskError> {
    match state.client().create_job(job).await {
        Ok(created) => {
            info!("Created job {} ({})", created.id, created.title);
            Ok(created)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn update_job(state: &AppState, id: i64, update: &JobUpdate) -> Result<Job, HrDeskError> {
    match state.client().update_job(id, update).await {
        Ok(job) => {
            info!("Updated job {id}");
            Ok(job)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn delete_job(state: &AppState, id: i64) -> Result<OkResponse, HrDeskError> {
    match state.client().delete_job(id).await {
        Ok(ack) => {
            info!("Deleted job {id}");
            Ok(ack)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}
