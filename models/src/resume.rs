use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    #[default]
    Received,
    Analyzed,
    Interviewed,
}

impl ResumeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::Received => "received",
            ResumeStatus::Analyzed => "analyzed",
            ResumeStatus::Interviewed => "interviewed",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            ResumeStatus::Received => "已收到",
            ResumeStatus::Analyzed => "已分析",
            ResumeStatus::Interviewed => "已面試",
        }
    }
}

/// A candidate submission linked to a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: i64,
    pub candidate_name: String,
    pub job_id: i64,
    pub resume_text: String,
    #[serde(default)]
    pub status: ResumeStatus,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub years_exp: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    pub submitted_at: String,

    #[serde(default)]
    pub applied_job_title: Option<String>,
    #[serde(default)]
    pub ai_match_score: Option<i64>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub match_highlights: Vec<String>,
    #[serde(default)]
    pub analysis_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeCreate {
    pub candidate_name: String,
    pub job_id: i64,
    pub resume_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}
