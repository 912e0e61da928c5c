use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Pipeline stages, in their conventional order. The order is advisory:
/// a company may move an interaction to any stage at any time.
pub const PIPELINE_STATUSES: [&str; 6] = [
    "interested",
    "contacted",
    "interviewing",
    "offered",
    "hired",
    "rejected",
];

/// Links one company to one candidate. Nothing prevents a company from
/// opening several interactions with the same candidate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInteraction {
    pub id: i32,
    pub company_id: i32,
    pub candidate_id: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
