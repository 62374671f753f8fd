use super::map_api_error;
use crate::error::HrDeskError;
use crate::state::AppState;

use client_core::InterviewFilter;
use models::{Interview, InterviewCreate, InterviewUpdate, OkResponse};

use log::{debug, info};

pub async fn list_interviews(
    state: &AppState,
    filter: &InterviewFilter,
) -> Result<Vec<Interview>, HrDeskError> {
    debug!("Listing interviews ({filter:?})");

    match state.client().list_interviews(filter).await {
        Ok(interviews) => Ok(interviews),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn get_interview(state: &AppState, id: i64) -> Result<Interview, HrDeskError> {
    match state.client().get_interview(id).await {
        Ok(interview) => Ok(interview),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn create_interview(
    state: &AppState,
    interview: &InterviewCreate,
) -> Result<Interview, HrDeskError> {
    match state.client().create_interview(interview).await {
        Ok(created) => {
            info!("Scheduled interview {}", created.id);
            Ok(created)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn update_interview(
    state: &AppState,
    id: i64,
    update: &InterviewUpdate,
) -> Result<Interview, HrDeskError> {
    match state.client().update_interview(id, update).await {
        Ok(interview) => {
            info!("Updated interview {id}");
            Ok(interview)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn delete_interview(state: &AppState, id: i64) -> Result<OkResponse, HrDeskError> {
    match state.client().delete_interview(id).await {
        Ok(ack) => {
            info!("Deleted interview {id}");
            Ok(ack)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}
