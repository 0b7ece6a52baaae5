use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cognitive dimensions in every complete persona
pub const DIMENSION_COUNT: usize = 24;

/// Value assigned to a dimension nobody has said anything about
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Weight applied to any dimension name outside the canonical table
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One axis of the student/teacher cognitive profile.
///
/// Variant order is the canonical declaration order. It is load-bearing:
/// ties in the best/worst explanation are broken by it, and
/// `Dimension::index` relies on the discriminants matching `Dimension::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Pace,
    Structure,
    Abstraction,
    Interactivity,
    VisualDependency,
    VerbalDensity,
    RepetitionNeed,
    Formality,
    HumorReceptivity,
    FeedbackStyle,
    Autonomy,
    CognitiveLoadTolerance,
    AttentionSpan,
    MotivationType,
    ErrorTolerance,
    SocialPreference,
    RealWorldNeed,
    EmotionalSensitivity,
    QuestionComfort,
    NoteTakingStyle,
    ChallengePreference,
    ContextNeed,
    StorytellingAffinity,
    RevisionStyle,
}

/// Unknown dimension name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension: {0}")]
pub struct UnknownDimension(pub String);

impl Dimension {
    /// All dimensions in canonical order
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Pace,
        Dimension::Structure,
        Dimension::Abstraction,
        Dimension::Interactivity,
        Dimension::VisualDependency,
        Dimension::VerbalDensity,
        Dimension::RepetitionNeed,
        Dimension::Formality,
        Dimension::HumorReceptivity,
        Dimension::FeedbackStyle,
        Dimension::Autonomy,
        Dimension::CognitiveLoadTolerance,
        Dimension::AttentionSpan,
        Dimension::MotivationType,
        Dimension::ErrorTolerance,
        Dimension::SocialPreference,
        Dimension::RealWorldNeed,
        Dimension::EmotionalSensitivity,
        Dimension::QuestionComfort,
        Dimension::NoteTakingStyle,
        Dimension::ChallengePreference,
        Dimension::ContextNeed,
        Dimension::StorytellingAffinity,
        Dimension::RevisionStyle,
    ];

    /// Position in the canonical order
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire name, as used in persona maps and match explanations
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Pace => "pace",
            Dimension::Structure => "structure",
            Dimension::Abstraction => "abstraction",
            Dimension::Interactivity => "interactivity",
            Dimension::VisualDependency => "visual_dependency",
            Dimension::VerbalDensity => "verbal_density",
            Dimension::RepetitionNeed => "repetition_need",
            Dimension::Formality => "formality",
            Dimension::HumorReceptivity => "humor_receptivity",
            Dimension::FeedbackStyle => "feedback_style",
            Dimension::Autonomy => "autonomy",
            Dimension::CognitiveLoadTolerance => "cognitive_load_tolerance",
            Dimension::AttentionSpan => "attention_span",
            Dimension::MotivationType => "motivation_type",
            Dimension::ErrorTolerance => "error_tolerance",
            Dimension::SocialPreference => "social_preference",
            Dimension::RealWorldNeed => "real_world_need",
            Dimension::EmotionalSensitivity => "emotional_sensitivity",
            Dimension::QuestionComfort => "question_comfort",
            Dimension::NoteTakingStyle => "note_taking_style",
            Dimension::ChallengePreference => "challenge_preference",
            Dimension::ContextNeed => "context_need",
            Dimension::StorytellingAffinity => "storytelling_affinity",
            Dimension::RevisionStyle => "revision_style",
        }
    }

    /// Matching weight for this dimension
    ///
    /// Weight tiers:
    /// - 3.0: pace, cognitive_load_tolerance, verbal_density, structure
    /// - 2.0: interactivity, abstraction, feedback_style, autonomy,
    ///   real_world_need, attention_span
    /// - 1.0: everything else
    pub const fn weight(self) -> f64 {
        match self {
            Dimension::Pace
            | Dimension::CognitiveLoadTolerance
            | Dimension::VerbalDensity
            | Dimension::Structure => 3.0,
            Dimension::Interactivity
            | Dimension::Abstraction
            | Dimension::FeedbackStyle
            | Dimension::Autonomy
            | Dimension::RealWorldNeed
            | Dimension::AttentionSpan => 2.0,
            _ => DEFAULT_WEIGHT,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// Weight for a dimension given by name, falling back to 1.0 for names
/// outside the table
pub fn weight_for(name: &str) -> f64 {
    name.parse::<Dimension>()
        .map(Dimension::weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

/// Sum of all canonical weights; the largest possible weighted distance
/// between two valid personas
pub fn total_weight() -> f64 {
    Dimension::ALL.iter().map(|d| d.weight()).sum()
}
