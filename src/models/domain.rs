use crate::core::dimensions::{Dimension, NEUTRAL_VALUE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cognitive profile: dimension name -> value in [0, 1]
///
/// Kept as a plain name-keyed map so incoming payloads with missing or
/// unknown keys still deserialize; completeness is checked by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Persona(BTreeMap<String, f64>);

impl Persona {
    /// Persona with every canonical dimension at 0.5
    pub fn neutral() -> Self {
        Self::uniform(NEUTRAL_VALUE)
    }

    /// Persona with every canonical dimension at `value`
    pub fn uniform(value: f64) -> Self {
        Dimension::ALL.iter().map(|d| (*d, value)).collect()
    }

    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.0.get(dimension.as_str()).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        self.0.insert(dimension.as_str().to_string(), value);
    }

    /// Builder-style `set`
    pub fn with(mut self, dimension: Dimension, value: f64) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn remove(&mut self, dimension: Dimension) -> Option<f64> {
        self.0.remove(dimension.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(Dimension, f64)> for Persona {
    fn from_iter<I: IntoIterator<Item = (Dimension, f64)>>(iter: I) -> Self {
        Persona(
            iter.into_iter()
                .map(|(d, v)| (d.as_str().to_string(), v))
                .collect(),
        )
    }
}

impl FromIterator<(String, f64)> for Persona {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Persona(iter.into_iter().collect())
    }
}

/// A single partial score an answer option contributes to one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub dimension: String,
    pub value: f64,
}

impl Contribution {
    pub fn new(dimension: impl Into<String>, value: f64) -> Self {
        Self {
            dimension: dimension.into(),
            value,
        }
    }
}

/// The option a student picked for one quiz question
///
/// An option may feed zero to three dimensions at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub dimensions: BTreeMap<String, f64>,
}

impl AnswerOption {
    pub fn contributions(&self) -> impl Iterator<Item = Contribution> + '_ {
        self.dimensions
            .iter()
            .map(|(dimension, value)| Contribution::new(dimension.clone(), *value))
    }
}

/// Student profile produced from a completed quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub name: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub persona: Persona,
    pub archetype: String,
    pub summary: String,
}

/// Teacher record as stored in the teacher catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherRecord {
    pub teacher_id: String,
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub persona: Persona,
}

/// Explanation of a match: the closest and the most divergent dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWhy {
    /// Three smallest weighted gaps, smallest first
    pub best: Vec<Dimension>,
    /// Two largest weighted gaps, largest first
    pub worst: Vec<Dimension>,
}

/// Score for one (student, teacher) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub compatibility_score: f64,
    pub why: MatchWhy,
}

/// Teacher annotated with its compatibility against one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeacher {
    pub teacher_id: String,
    pub name: String,
    pub subject: String,
    pub archetype: Option<String>,
    pub tagline: Option<String>,
    pub summary: Option<String>,
    pub compatibility_score: f64,
    pub why: MatchWhy,
}

impl RankedTeacher {
    pub fn new(teacher: &TeacherRecord, result: MatchResult) -> Self {
        Self {
            teacher_id: teacher.teacher_id.clone(),
            name: teacher.name.clone(),
            subject: teacher.subject.clone(),
            archetype: teacher.archetype.clone(),
            tagline: teacher.tagline.clone(),
            summary: teacher.summary.clone(),
            compatibility_score: result.compatibility_score,
            why: result.why,
        }
    }
}
