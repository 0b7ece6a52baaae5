// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnswerOption, Contribution, MatchResult, MatchWhy, Persona, RankedTeacher, StudentProfile, TeacherRecord};
pub use requests::{MatchRequest, PersonaRequest, TeachersQuery};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, TeachersResponse};
