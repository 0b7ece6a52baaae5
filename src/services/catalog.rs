use crate::core::filters::filter_by_subject;
use crate::models::TeacherRecord;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the teacher catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Teachers file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error reading teachers file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed teachers file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Accepted layouts of `teachers.json`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { teachers: Vec<TeacherRecord> },
    Bare(Vec<TeacherRecord>),
}

/// Immutable, in-memory teacher catalog
///
/// Loaded once at startup and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct TeacherCatalog {
    teachers: Vec<TeacherRecord>,
}

impl TeacherCatalog {
    pub fn new(teachers: Vec<TeacherRecord>) -> Self {
        Self { teachers }
    }

    /// Parse a catalog from JSON: either `{ "teachers": [...] }` or a bare array
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let teachers = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Wrapped { teachers } => teachers,
            CatalogFile::Bare(teachers) => teachers,
        };
        Ok(Self::new(teachers))
    }

    /// Load the catalog from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&json)?;

        tracing::debug!("Loaded {} teachers from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn teachers(&self) -> &[TeacherRecord] {
        &self.teachers
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    pub fn get(&self, teacher_id: &str) -> Option<&TeacherRecord> {
        self.teachers.iter().find(|t| t.teacher_id == teacher_id)
    }

    /// Teachers of one subject (blank or `None` means all), in catalog order
    pub fn by_subject(&self, subject: Option<&str>) -> Vec<&TeacherRecord> {
        filter_by_subject(&self.teachers, subject)
    }

    /// Distinct subjects, sorted
    pub fn subjects(&self) -> Vec<&str> {
        self.teachers
            .iter()
            .map(|t| t.subject.trim())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WRAPPED: &str = r#"{
        "_schema_notes": "ignored",
        "teachers": [
            { "teacher_id": "tch_bio_001", "name": "Ms. Kovacs", "subject": "Biology" },
            { "teacher_id": "tch_his_001", "name": "Mr. Reyes", "subject": "History" },
            { "teacher_id": "tch_bio_002", "name": "Dr. Osei", "subject": "Biology" }
        ]
    }"#;

    #[test]
    fn test_parse_wrapped_layout() {
        let catalog = TeacherCatalog::from_json_str(WRAPPED).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.subjects(), vec!["Biology", "History"]);
        assert_eq!(catalog.by_subject(Some("Biology")).len(), 2);
        assert!(catalog.get("tch_his_001").is_some());
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{ "teacher_id": "tch_bio_001", "name": "Ms. Kovacs" }]"#;
        let catalog = TeacherCatalog::from_json_str(json).unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = TeacherCatalog::from_json_str(r#"{ "teachers": 42 }"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WRAPPED.as_bytes()).unwrap();

        let catalog = TeacherCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = TeacherCatalog::load("/definitely/not/here/teachers.json").await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }
}
