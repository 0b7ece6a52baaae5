use crate::core::{
    error::MatchError,
    filters::filter_by_subject,
    scoring::{resolve_persona, score_vectors},
};
use crate::models::{Persona, RankedTeacher, TeacherRecord};

/// Result of one match request
#[derive(Debug)]
pub struct MatchOutcome {
    pub ranked: Vec<RankedTeacher>,
    /// Teachers considered after the subject filter, before truncation
    pub total_candidates: usize,
}

/// Score every teacher against the student and sort best first
///
/// The sort is stable: teachers with equal scores keep their input order.
/// The output has exactly one entry per input teacher; an empty input gives
/// an empty ranking.
///
/// # Errors
/// Fails fast with `IncompletePersona` on the first incomplete persona,
/// checking the student first and then teachers in input order.
pub fn rank_teachers<'a, I>(student: &Persona, teachers: I) -> Result<Vec<RankedTeacher>, MatchError>
where
    I: IntoIterator<Item = &'a TeacherRecord>,
{
    let student = resolve_persona(student, "student")?;

    let mut ranked = teachers
        .into_iter()
        .map(|teacher| -> Result<RankedTeacher, MatchError> {
            let persona = resolve_persona(&teacher.persona, &teacher.teacher_id)?;
            Ok(RankedTeacher::new(teacher, score_vectors(&student, &persona)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    ranked.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));

    Ok(ranked)
}

/// Match orchestrator: subject pre-filter, ranking, optional truncation
///
/// # Pipeline Stages
/// 1. Subject filter (trimmed equality, blank means all)
/// 2. Pairwise scoring
/// 3. Stable descending sort
/// 4. Truncation to `max_results`, if configured
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    max_results: Option<usize>,
}

impl Matcher {
    pub fn new(max_results: Option<usize>) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    /// Rank the catalog for a student
    ///
    /// # Arguments
    /// * `student` - The student's persona
    /// * `teachers` - Full teacher catalog
    /// * `subject` - Optional subject filter
    pub fn find_matches(
        &self,
        student: &Persona,
        teachers: &[TeacherRecord],
        subject: Option<&str>,
    ) -> Result<MatchOutcome, MatchError> {
        let candidates = filter_by_subject(teachers, subject);
        let total_candidates = candidates.len();

        let mut ranked = rank_teachers(student, candidates)?;

        if let Some(limit) = self.max_results {
            ranked.truncate(limit);
        }

        tracing::debug!(
            "Ranked {} of {} candidate teachers (subject: {:?})",
            ranked.len(),
            total_candidates,
            subject
        );

        Ok(MatchOutcome {
            ranked,
            total_candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimensions::Dimension;

    fn create_teacher(id: &str, subject: &str, persona: Persona) -> TeacherRecord {
        TeacherRecord {
            teacher_id: id.to_string(),
            name: format!("Teacher {}", id),
            subject: subject.to_string(),
            archetype: Some("The Socratic Guide".to_string()),
            tagline: None,
            summary: None,
            persona,
        }
    }

    fn ids(ranked: &[RankedTeacher]) -> Vec<&str> {
        ranked.iter().map(|r| r.teacher_id.as_str()).collect()
    }

    #[test]
    fn test_ranks_by_distance() {
        let student = Persona::uniform(0.0);
        // distances 38, 0 and 10
        let far = create_teacher("far", "Biology", Persona::uniform(1.0));
        let same = create_teacher("same", "Biology", Persona::uniform(0.0));
        let mid = create_teacher(
            "mid",
            "Biology",
            Persona::uniform(0.0)
                .with(Dimension::Pace, 1.0)
                .with(Dimension::Structure, 1.0)
                .with(Dimension::Interactivity, 1.0)
                .with(Dimension::Abstraction, 1.0),
        );

        let ranked = rank_teachers(&student, &[far, same, mid]).unwrap();

        assert_eq!(ids(&ranked), vec!["same", "mid", "far"]);
        assert_eq!(ranked[0].compatibility_score, 100.0);
        assert_eq!(ranked[1].compatibility_score, 9.09);
        assert_eq!(ranked[2].compatibility_score, 2.56);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let student = Persona::neutral();
        let teachers = vec![
            create_teacher("b", "Biology", Persona::neutral().with(Dimension::Formality, 0.9)),
            create_teacher("a", "Biology", Persona::neutral().with(Dimension::Formality, 0.1)),
        ];

        let ranked = rank_teachers(&student, &teachers).unwrap();

        assert_eq!(ranked[0].compatibility_score, ranked[1].compatibility_score);
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_catalog_is_not_an_error() {
        let ranked = rank_teachers(&Persona::neutral(), &[] as &[TeacherRecord]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_incomplete_teacher_fails_whole_request() {
        let mut broken = Persona::neutral();
        broken.remove(Dimension::Pace);

        let teachers = vec![
            create_teacher("ok", "Biology", Persona::neutral()),
            create_teacher("tch_broken", "Biology", broken),
        ];

        let err = rank_teachers(&Persona::neutral(), &teachers).unwrap_err();
        assert_eq!(err.owner(), "tch_broken");
        assert_eq!(err.dimensions(), vec!["pace"]);
    }

    #[test]
    fn test_find_matches_filters_and_truncates() {
        let teachers = vec![
            create_teacher("1", "Biology", Persona::neutral()),
            create_teacher("2", "History", Persona::neutral()),
            create_teacher("3", "Biology", Persona::uniform(0.4)),
            create_teacher("4", "Biology", Persona::uniform(0.9)),
        ];

        let matcher = Matcher::new(Some(2));
        let outcome = matcher
            .find_matches(&Persona::neutral(), &teachers, Some("Biology"))
            .unwrap();

        assert_eq!(outcome.total_candidates, 3);
        assert_eq!(ids(&outcome.ranked), vec!["1", "3"]);
    }
}
