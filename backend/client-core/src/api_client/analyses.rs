use super::{ApiClient, ApiRequest, QueryString};
use crate::error::ApiClientError;

use models::{AiAnalysis, AnalysisCreate};

pub const ANALYSES_PATH: &str = "/ai-analyses";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisFilter {
    pub job_id: Option<i64>,
    pub resume_id: Option<i64>,
}

impl AnalysisFilter {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .push_id("job_id", self.job_id)
            .push_id("resume_id", self.resume_id)
    }
}

impl ApiClient {
    pub async fn list_analyses(
        &self,
        filter: &AnalysisFilter,
    ) -> Result<Vec<AiAnalysis>, ApiClientError> {
        let path = filter.to_query().append_to(ANALYSES_PATH);
        self.execute_as(&ApiRequest::get(path)).await
    }

    pub async fn get_analysis(&self, id: i64) -> Result<AiAnalysis, ApiClientError> {
        self.execute_as(&ApiRequest::get(format!("{ANALYSES_PATH}/{id}")))
            .await
    }

    /// Request an analysis. The server returns the existing one for the
    /// same job and resume unless `force` is set.
    pub async fn create_analysis(
        &self,
        analysis: &AnalysisCreate,
    ) -> Result<AiAnalysis, ApiClientError> {
        self.execute_as(&ApiRequest::post(ANALYSES_PATH).json(analysis)?)
            .await
    }
}
