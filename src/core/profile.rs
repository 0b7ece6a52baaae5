use crate::core::dimensions::{Dimension, NEUTRAL_VALUE};
use crate::models::{Persona, StudentProfile};

/// Display name used when the student does not give one
pub const DEFAULT_STUDENT_NAME: &str = "Student";

const STRONG_COUNT: usize = 3;
const WEAK_COUNT: usize = 2;

/// Generate a student id of the form `stu_` followed by 8 hex chars
pub fn generate_student_id() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("stu_{}", &hex[..8])
}

/// Derive a short archetype label from the dominant dimensions
///
/// Rules are checked in order; the first match wins.
pub fn derive_archetype(persona: &Persona) -> &'static str {
    let v = |dim: Dimension| persona.get(dim).unwrap_or(NEUTRAL_VALUE);

    if v(Dimension::Autonomy) > 0.7 && v(Dimension::Structure) < 0.4 {
        "Independent Explorer"
    } else if v(Dimension::Interactivity) > 0.7 && v(Dimension::SocialPreference) > 0.6 {
        "Collaborative Learner"
    } else if v(Dimension::Abstraction) > 0.7 && v(Dimension::CognitiveLoadTolerance) > 0.6 {
        "Analytical Thinker"
    } else if v(Dimension::RealWorldNeed) > 0.7 && v(Dimension::VisualDependency) > 0.6 {
        "Practical Visualizer"
    } else if v(Dimension::Pace) > 0.6 && v(Dimension::Structure) < 0.4 {
        "Fast-Paced Adapter"
    } else if v(Dimension::Structure) > 0.6 && v(Dimension::RepetitionNeed) > 0.6 {
        "Methodical Processor"
    } else {
        "Balanced Learner"
    }
}

/// One-line summary naming the strongest and weakest dimensions
pub fn summarize(persona: &Persona) -> String {
    let mut ranked: Vec<(Dimension, f64)> = Dimension::ALL
        .iter()
        .map(|dim| (*dim, persona.get(*dim).unwrap_or(NEUTRAL_VALUE)))
        .collect();

    // Stable sorts keep canonical order among equal values at both ends
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let strong: Vec<&str> = ranked
        .iter()
        .take(STRONG_COUNT)
        .map(|(d, _)| d.as_str())
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    let weak: Vec<&str> = ranked
        .iter()
        .take(WEAK_COUNT)
        .map(|(d, _)| d.as_str())
        .collect();

    format!(
        "Strong on: {}. Lower on: {}.",
        strong.join(", "),
        weak.join(", ")
    )
}

/// Build a full student profile around an aggregated persona
pub fn build_student_profile(name: Option<&str>, persona: Persona) -> StudentProfile {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_STUDENT_NAME)
        .to_string();

    StudentProfile {
        student_id: generate_student_id(),
        name,
        generated_at: chrono::Utc::now(),
        archetype: derive_archetype(&persona).to_string(),
        summary: summarize(&persona),
        persona,
    }
}
