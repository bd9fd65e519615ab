use serde::{Deserialize, Serialize};

/// Opaque per-browser identity token, generated once and persisted for the
/// lifetime of the browser's storage. Uniqueness is probabilistic (timestamp
/// plus random suffix), not cryptographic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl VoterId {
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        VoterId(format!("user_{}_{}", millis, &suffix[..9]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for VoterId {
    fn from(raw: String) -> Self {
        VoterId(raw)
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_has_token_shape() {
        let id = VoterId::generate();
        assert!(id.as_str().starts_with("user_"));
        assert_eq!(id.as_str().split('_').count(), 3);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(VoterId::generate(), VoterId::generate());
    }

    #[test]
    fn test_round_trips_through_raw_string() {
        let id = VoterId::from("user_1700000000000_ab12cd34e".to_string());
        assert_eq!(id.as_str(), "user_1700000000000_ab12cd34e");
    }
}
