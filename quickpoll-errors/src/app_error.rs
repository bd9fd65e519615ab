use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("no choice selected")]
    NoChoiceSelected,

    #[error("unknown choice: {0}")]
    UnknownChoice(String),

    #[error("this browser has already voted")]
    AlreadyVoted,

    #[error("vote submission failed: {0}")]
    SubmitFailed(String),

    #[error("failed to load results: {0}")]
    FetchFailed(String),

    #[error("local storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::NoChoiceSelected => "Please select an option",
            Self::UnknownChoice(_) => "That option is not part of this survey",
            Self::AlreadyVoted => "You have already voted!",
            Self::SubmitFailed(_) => "Error submitting vote. Please try again.",
            Self::FetchFailed(_) => "Error loading results. Please refresh the page.",
            Self::Storage(_) => "Browser storage is unavailable.",
        }
    }

    /// Validation errors are recovered inline in the form, without touching
    /// the submission state or the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::NoChoiceSelected | Self::UnknownChoice(_))
    }
}
