//! Unitinder Match - student/teacher compatibility scoring service
//!
//! This library provides the matching engine used by Unitinder: quiz answers
//! are aggregated into a 24-dimension persona, which is scored against each
//! teacher with a weighted distance and ranked best first.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{aggregate, rank_teachers, score_pair, Dimension, MatchError, Matcher};
pub use models::{MatchResult, MatchWhy, Persona, RankedTeacher, StudentProfile, TeacherRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let persona = aggregate(&[models::Contribution::new("pace", 0.9)]);
        let result = score_pair(&persona, &Persona::neutral()).unwrap();
        assert!(result.compatibility_score < 100.0);
    }
}
