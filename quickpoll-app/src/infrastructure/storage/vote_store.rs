use quickpoll_errors::AppError;

use crate::application::VoteStorage;
use crate::domain::VoterId;

const HAS_VOTED_KEY: &str = "hasVoted";
const USER_ID_KEY: &str = "userId";
const VOTED: &str = "true";

/// Typed wrapper over the browser's `localStorage`; the two keys above never
/// leak to callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVoteStore;

impl LocalVoteStore {
    pub fn new() -> Self {
        Self
    }

    fn backend(&self) -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))
    }

    fn read(&self, key: &str) -> Option<String> {
        self.backend()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.backend()?
            .set_item(key, value)
            .map_err(|err| AppError::Storage(format!("{err:?}")))
    }
}

impl VoteStorage for LocalVoteStore {
    fn has_voted(&self) -> bool {
        self.read(HAS_VOTED_KEY).as_deref() == Some(VOTED)
    }

    fn mark_voted(&self) -> Result<(), AppError> {
        self.write(HAS_VOTED_KEY, VOTED)
    }

    fn voter_id(&self) -> Result<VoterId, AppError> {
        if let Some(existing) = self.read(USER_ID_KEY) {
            return Ok(VoterId::from(existing));
        }
        let fresh = VoterId::generate();
        self.write(USER_ID_KEY, fresh.as_str())?;
        tracing::debug!(id = %fresh, "generated voter identity");
        Ok(fresh)
    }

    fn reset(&self) -> Result<(), AppError> {
        self.backend()?
            .remove_item(HAS_VOTED_KEY)
            .map_err(|err| AppError::Storage(format!("{err:?}")))
    }
}
