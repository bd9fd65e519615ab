use serde::{Deserialize, Serialize};

/// The single survey question this widget instance renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

impl Poll {
    pub fn new<I, S>(id: impl Into<String>, question: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|option| option == choice)
    }
}
