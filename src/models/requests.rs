use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{AnswerOption, Persona};

/// Request to rank the teacher catalog for a student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(alias = "student_persona", rename = "studentPersona")]
    pub student_persona: Persona,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub subject: Option<String>,
}

/// Request to turn quiz answers into a student profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonaRequest {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub name: Option<String>,
    /// Selected option per answered question
    #[validate(length(max = 200))]
    #[serde(default)]
    pub answers: Vec<AnswerOption>,
}

/// Query for listing teachers
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TeachersQuery {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub subject: Option<String>,
}
