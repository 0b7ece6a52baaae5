use crate::core::dimensions::{Dimension, DIMENSION_COUNT};
use crate::core::error::MatchError;
use crate::models::{MatchResult, MatchWhy, Persona};

/// Number of best-aligned dimensions reported per match
pub const BEST_COUNT: usize = 3;

/// Number of worst-aligned dimensions reported per match
pub const WORST_COUNT: usize = 2;

/// Persona values laid out in canonical dimension order
pub type PersonaVector = [f64; DIMENSION_COUNT];

/// Weighted gap between a student and a teacher on one dimension
pub type DimensionContribution = (Dimension, f64);

/// Round to two decimal places, halves away from zero
///
/// Rounds the binary value, not its decimal spelling: inputs such as 0.285
/// are stored just below the half and round down to 0.28.
#[inline]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Check that a persona covers all canonical dimensions with values in
/// [0, 1], and lay it out in canonical order
///
/// Unknown keys are ignored. `owner` names the persona in the error.
pub fn resolve_persona(persona: &Persona, owner: &str) -> Result<PersonaVector, MatchError> {
    let mut values = [0.0; DIMENSION_COUNT];
    let mut missing = Vec::new();
    let mut out_of_range = Vec::new();

    for dim in Dimension::ALL {
        match persona.get(dim) {
            Some(v) if (0.0..=1.0).contains(&v) => values[dim.index()] = v,
            Some(_) => out_of_range.push(dim.as_str().to_string()),
            None => missing.push(dim.as_str().to_string()),
        }
    }

    if missing.is_empty() && out_of_range.is_empty() {
        Ok(values)
    } else {
        Err(MatchError::IncompletePersona {
            owner: owner.to_string(),
            missing,
            out_of_range,
        })
    }
}

/// Per-dimension weighted absolute difference, in canonical order
pub fn dimension_contributions(
    student: &PersonaVector,
    teacher: &PersonaVector,
) -> [DimensionContribution; DIMENSION_COUNT] {
    Dimension::ALL.map(|dim| {
        let i = dim.index();
        (dim, dim.weight() * (student[i] - teacher[i]).abs())
    })
}

/// Weighted Manhattan distance: the sum of all contributions
#[inline]
pub fn weighted_distance(contributions: &[DimensionContribution]) -> f64 {
    contributions.iter().map(|(_, c)| c).sum()
}

/// Map a weighted distance onto (0, 100]
///
/// score = 100 / (1 + distance), rounded to two decimals. Only a zero
/// distance yields exactly 100.
pub fn compatibility_score(total_distance: f64) -> f64 {
    if total_distance <= 0.0 {
        return 100.0;
    }

    let score = round_to_hundredths(100.0 / (1.0 + total_distance));

    // Rounding must not turn a tiny mismatch into a perfect score
    score.min(99.99)
}

/// Pick the best and worst aligned dimensions
///
/// Contributions are sorted ascending with a stable sort, so exact ties
/// keep the canonical dimension order on both ends.
pub fn explain(contributions: &[DimensionContribution]) -> MatchWhy {
    let mut sorted = contributions.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let best = sorted.iter().take(BEST_COUNT).map(|(d, _)| *d).collect();
    let worst = sorted
        .iter()
        .skip(sorted.len().saturating_sub(WORST_COUNT))
        .rev()
        .map(|(d, _)| *d)
        .collect();

    MatchWhy { best, worst }
}

/// Score two already-resolved personas
pub fn score_vectors(student: &PersonaVector, teacher: &PersonaVector) -> MatchResult {
    let contributions = dimension_contributions(student, teacher);
    let total_distance = weighted_distance(&contributions);

    MatchResult {
        compatibility_score: compatibility_score(total_distance),
        why: explain(&contributions),
    }
}

/// Score one (student, teacher) pair
///
/// Both personas must be complete; see [`resolve_persona`].
pub fn score_pair(student: &Persona, teacher: &Persona) -> Result<MatchResult, MatchError> {
    let student = resolve_persona(student, "student")?;
    let teacher = resolve_persona(teacher, "teacher")?;

    Ok(score_vectors(&student, &teacher))
}
