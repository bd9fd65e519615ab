use quickpoll_errors::AppError;

use crate::domain::{Ballot, Tally, VoterId};

/// Write-and-read surface of the remote tally service.
///
/// The write side runs in opaque-response mode: `Ok` means the request left
/// without a transport-level error, not that the server confirmed
/// persistence. Callers must not assume anything stronger.
#[allow(async_fn_in_trait)]
pub trait TallyGateway {
    async fn submit(&self, ballot: &Ballot) -> Result<(), AppError>;

    async fn fetch(&self) -> Result<Tally, AppError>;
}

/// Typed access to the browser-scoped vote flags.
pub trait VoteStorage {
    /// Pure read; absent key or unavailable storage reads as `false`.
    fn has_voted(&self) -> bool;

    /// Idempotent persistent set.
    fn mark_voted(&self) -> Result<(), AppError>;

    /// Existing identity token, or a freshly generated one persisted before
    /// returning.
    fn voter_id(&self) -> Result<VoterId, AppError>;

    /// Clears the has-voted flag only; the identity token survives.
    fn reset(&self) -> Result<(), AppError>;
}
