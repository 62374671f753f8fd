use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scored assessment of a resume against a job, produced by the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub id: i64,
    pub job_id: i64,
    pub resume_id: i64,
    pub created_at: String,
    pub model: String,
    pub prompt_version: String,

    pub overall_score: i64,
    pub professional_score: i64,
    pub communication_score: i64,
    pub problem_solving_score: i64,

    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,

    #[serde(default)]
    pub is_mock: bool,
    #[serde(default)]
    pub raw_response: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisCreate {
    pub job_id: i64,
    pub resume_id: i64,
    /// Re-run the analysis even when one already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}
