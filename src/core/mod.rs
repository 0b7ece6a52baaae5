// Core algorithm exports
pub mod aggregator;
pub mod dimensions;
pub mod error;
pub mod filters;
pub mod matcher;
pub mod profile;
pub mod scoring;

pub use aggregator::{aggregate, aggregate_answers};
pub use dimensions::{Dimension, DIMENSION_COUNT};
pub use error::MatchError;
pub use filters::{filter_by_subject, matches_subject};
pub use matcher::{rank_teachers, MatchOutcome, Matcher};
pub use profile::build_student_profile;
pub use scoring::{compatibility_score, score_pair};
