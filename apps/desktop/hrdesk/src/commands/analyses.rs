use super::map_api_error;
use crate::error::HrDeskError;
use crate::state::AppState;

use client_core::AnalysisFilter;
use models::{AiAnalysis, AnalysisCreate};

use log::{debug, info};

pub async fn list_analyses(
    state: &AppState,
    filter: &AnalysisFilter,
) -> Result<Vec<AiAnalysis>, HrDeskError> {
    debug!("Listing analyses ({filter:?})");

    match state.client().list_analyses(filter).await {
        Ok(analyses) => Ok(analyses),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

pub async fn get_analysis(state: &AppState, id: i64) -> Result<AiAnalysis, HrDeskError> {
    match state.client().get_analysis(id).await {
        Ok(analysis) => Ok(analysis),
        Err(e) => Err(map_api_error(state, e).await),
    }
}

/// Run (or fetch the cached) analysis of a resume against its job.
pub async fn create_analysis(
    state: &AppState,
    request: &AnalysisCreate,
) -> Result<AiAnalysis, HrDeskError> {
    debug!(
        "Requesting analysis for job {} / resume {} (force: {:?})",
        request.job_id, request.resume_id, request.force
    );

    match state.client().create_analysis(request).await {
        Ok(analysis) => {
            info!(
                "Analysis {} scored {} (mock: {})",
                analysis.id, analysis.overall_score, analysis.is_mock
            );
            Ok(analysis)
        }
        Err(e) => Err(map_api_error(state, e).await),
    }
}
