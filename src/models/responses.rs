use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedTeacher, TeacherRecord};

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub ranked: Vec<RankedTeacher>,
    pub total_results: usize,
}

/// Response for the teacher listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachersResponse {
    pub teachers: Vec<TeacherRecord>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub teachers: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
