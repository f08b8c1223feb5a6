use serde::{Deserialize, Serialize};

/// Aggregate returned by the rating service for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl RatingSummary {
    pub fn new(average: f64, count: u64) -> Self {
        Self {
            average,
            count,
            error: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRatingRequest {
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRatingResponse {
    pub status: SubmitStatus,
    #[serde(default)]
    pub message: Option<String>,
}
