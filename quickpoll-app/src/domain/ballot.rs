use serde::{Deserialize, Serialize};

use super::VoterId;

/// A single submitted vote. Built fresh for every submission and never
/// persisted locally; field names follow the tally service's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    pub question_id: String,
    pub choice: String,
    #[serde(rename = "userId")]
    pub voter_id: VoterId,
}

impl Ballot {
    pub fn new(question_id: impl Into<String>, choice: impl Into<String>, voter_id: VoterId) -> Self {
        Self {
            question_id: question_id.into(),
            choice: choice.into(),
            voter_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_uses_service_field_names() {
        let ballot = Ballot::new("q1", "Yes", VoterId::from("user_1_abc".to_string()));
        let json = serde_json::to_value(&ballot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "questionId": "q1",
                "choice": "Yes",
                "userId": "user_1_abc",
            })
        );
    }
}
