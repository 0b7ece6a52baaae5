use thiserror::Error;

/// Errors raised by the scoring engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// A persona handed to the scorer is missing canonical dimensions or
    /// carries values outside [0, 1]
    #[error("incomplete persona for {owner}: missing {missing:?}, out of range {out_of_range:?}")]
    IncompletePersona {
        owner: String,
        missing: Vec<String>,
        out_of_range: Vec<String>,
    },
}

impl MatchError {
    /// Every dimension name the error refers to, missing ones first
    pub fn dimensions(&self) -> Vec<&str> {
        match self {
            MatchError::IncompletePersona { missing, out_of_range, .. } => missing
                .iter()
                .chain(out_of_range.iter())
                .map(String::as_str)
                .collect(),
        }
    }

    /// Student or teacher id the failing persona belongs to
    pub fn owner(&self) -> &str {
        match self {
            MatchError::IncompletePersona { owner, .. } => owner,
        }
    }
}
