use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    Completed,
    Canceled,
}

impl InterviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Canceled => "canceled",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            InterviewStatus::Scheduled => "已排程",
            InterviewStatus::Completed => "已完成",
            InterviewStatus::Canceled => "已取消",
        }
    }
}

/// A scheduled or completed meeting tied to a job and a resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: i64,
    pub job_id: i64,
    pub resume_id: i64,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub status: InterviewStatus,

    #[serde(default)]
    pub interview_round: String,
    #[serde(default)]
    pub interviewer: String,
    #[serde(default)]
    pub meeting_link: String,
    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub decision: String,
    #[serde(default)]
    pub rating: Option<i64>,

    pub created_at: String,
    pub updated_at: String,

    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCreate {
    pub job_id: i64,
    pub resume_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_round: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

/// Partial interview update. Unset fields are omitted from the request body.
///
/// `scheduled_at` and `rating` are nullable on the record, so they take a
/// second level: `Some(None)` sends an explicit `null` that clears the value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InterviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub scheduled_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_round: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub rating: Option<Option<i64>>,
}
