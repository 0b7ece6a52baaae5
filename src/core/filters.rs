use crate::models::TeacherRecord;

/// Check if a teacher teaches the requested subject
///
/// Both sides are trimmed; comparison is otherwise exact.
#[inline]
pub fn matches_subject(teacher: &TeacherRecord, subject: &str) -> bool {
    teacher.subject.trim() == subject.trim()
}

/// Normalize an optional subject filter: blank means "no filter"
#[inline]
pub fn subject_filter(subject: Option<&str>) -> Option<&str> {
    subject.map(str::trim).filter(|s| !s.is_empty())
}

/// Keep only teachers of the given subject, preserving input order
pub fn filter_by_subject<'a>(
    teachers: &'a [TeacherRecord],
    subject: Option<&str>,
) -> Vec<&'a TeacherRecord> {
    match subject_filter(subject) {
        Some(subject) => teachers
            .iter()
            .filter(|t| matches_subject(t, subject))
            .collect(),
        None => teachers.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Persona;

    fn create_teacher(id: &str, subject: &str) -> TeacherRecord {
        TeacherRecord {
            teacher_id: id.to_string(),
            name: format!("Teacher {}", id),
            subject: subject.to_string(),
            archetype: None,
            tagline: None,
            summary: None,
            persona: Persona::neutral(),
        }
    }

    #[test]
    fn test_matches_subject_trims() {
        let teacher = create_teacher("1", " Biology ");

        assert!(matches_subject(&teacher, "Biology"));
        assert!(matches_subject(&teacher, "Biology  "));
        assert!(!matches_subject(&teacher, "biology"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let teachers = vec![
            create_teacher("1", "Biology"),
            create_teacher("2", "History"),
            create_teacher("3", "Biology"),
        ];

        let ids: Vec<&str> = filter_by_subject(&teachers, Some("Biology"))
            .iter()
            .map(|t| t.teacher_id.as_str())
            .collect();

        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_blank_subject_keeps_everyone() {
        let teachers = vec![create_teacher("1", "Biology"), create_teacher("2", "History")];

        assert_eq!(filter_by_subject(&teachers, Some("  ")).len(), 2);
        assert_eq!(filter_by_subject(&teachers, None).len(), 2);
        assert!(filter_by_subject(&teachers, Some("Physics")).is_empty());
    }
}
