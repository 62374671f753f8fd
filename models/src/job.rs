use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
        }
    }

    /// Label shown in the job list.
    pub fn display_label(&self) -> &'static str {
        match self {
            JobStatus::Open => "招募中",
            JobStatus::Closed => "已關閉",
        }
    }
}

/// A job posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
    pub created_at: String,
    /// One of "0-1", "2-3", "4-6", "7+".
    pub experience_level: String,
    pub education: String,
    pub ai_resume_matching_enabled: bool,
    pub ai_question_gen_enabled: bool,
}

/// Payload for creating a job: every [`Job`] field except `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobCreate {
    pub title: String,
    pub department: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub nice_to_have: Vec<String>,
    pub status: JobStatus,
    pub experience_level: String,
    pub education: String,
    pub ai_resume_matching_enabled: bool,
    pub ai_question_gen_enabled: bool,
}

/// Partial job update. Unset fields are omitted from the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice_to_have: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_resume_matching_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_question_gen_enabled: Option<bool>,
}
