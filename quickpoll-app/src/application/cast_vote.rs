use quickpoll_errors::AppError;

use super::{TallyGateway, VoteStorage};
use crate::domain::{Ballot, Poll};

/// One-vote-per-browser submission workflow.
///
/// Both guards run before any network traffic: a browser that has already
/// voted is rejected outright, and a missing or unknown choice is a local
/// validation failure.
pub struct CastVote<G, S> {
    poll: Poll,
    gateway: G,
    store: S,
}

impl<G: TallyGateway, S: VoteStorage> CastVote<G, S> {
    pub fn new(poll: Poll, gateway: G, store: S) -> Self {
        Self {
            poll,
            gateway,
            store,
        }
    }

    /// Runs the entry and validation guards without side effects, returning
    /// the normalized choice on success.
    pub fn check(&self, choice: Option<&str>) -> Result<String, AppError> {
        if self.store.has_voted() {
            return Err(AppError::AlreadyVoted);
        }
        let choice = match choice.map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => return Err(AppError::NoChoiceSelected),
        };
        if !self.poll.has_option(choice) {
            return Err(AppError::UnknownChoice(choice.to_string()));
        }
        Ok(choice.to_string())
    }

    pub async fn execute(&self, choice: Option<&str>) -> Result<(), AppError> {
        let choice = self.check(choice)?;
        let voter_id = self.store.voter_id()?;
        let ballot = Ballot::new(self.poll.id.clone(), choice, voter_id);

        tracing::info!(question = %ballot.question_id, choice = %ballot.choice, "submitting vote");
        self.gateway.submit(&ballot).await?;

        // The vote left the browser; a broken flag write must not surface as
        // a submission failure.
        if let Err(err) = self.store.mark_voted() {
            tracing::warn!("vote submitted but the local flag was not persisted: {err}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{Tally, VoterId};

    #[derive(Default)]
    struct RecordingGateway {
        submitted: RefCell<Vec<Ballot>>,
        fail_submit: bool,
    }

    impl TallyGateway for RecordingGateway {
        async fn submit(&self, ballot: &Ballot) -> Result<(), AppError> {
            if self.fail_submit {
                return Err(AppError::SubmitFailed("connection refused".to_string()));
            }
            self.submitted.borrow_mut().push(ballot.clone());
            Ok(())
        }

        async fn fetch(&self) -> Result<Tally, AppError> {
            Ok(Tally::default())
        }
    }

    #[derive(Default)]
    struct MemoryVoteStore {
        entries: RefCell<HashMap<&'static str, String>>,
    }

    impl VoteStorage for MemoryVoteStore {
        fn has_voted(&self) -> bool {
            self.entries.borrow().get("hasVoted").map(String::as_str) == Some("true")
        }

        fn mark_voted(&self) -> Result<(), AppError> {
            self.entries
                .borrow_mut()
                .insert("hasVoted", "true".to_string());
            Ok(())
        }

        fn voter_id(&self) -> Result<VoterId, AppError> {
            if let Some(existing) = self.entries.borrow().get("userId") {
                return Ok(VoterId::from(existing.clone()));
            }
            let fresh = VoterId::generate();
            self.entries
                .borrow_mut()
                .insert("userId", fresh.as_str().to_string());
            Ok(fresh)
        }

        fn reset(&self) -> Result<(), AppError> {
            self.entries.borrow_mut().remove("hasVoted");
            Ok(())
        }
    }

    fn poll() -> Poll {
        Poll::new("q1", "Yes or no?", ["Yes", "No"])
    }

    #[tokio::test]
    async fn test_already_voted_browser_never_reaches_the_network() {
        let store = MemoryVoteStore::default();
        store.mark_voted().unwrap();
        let cast = CastVote::new(poll(), RecordingGateway::default(), store);

        let err = cast.execute(Some("Yes")).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyVoted));
        assert!(cast.gateway.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_choice_is_rejected_locally() {
        let cast = CastVote::new(poll(), RecordingGateway::default(), MemoryVoteStore::default());

        for choice in [None, Some(""), Some("   ")] {
            let err = cast.execute(choice).await.unwrap_err();
            assert!(matches!(err, AppError::NoChoiceSelected));
        }
        assert!(cast.gateway.submitted.borrow().is_empty());
        assert!(!cast.store.has_voted());
    }

    #[tokio::test]
    async fn test_choice_outside_the_poll_is_rejected_locally() {
        let cast = CastVote::new(poll(), RecordingGateway::default(), MemoryVoteStore::default());

        let err = cast.execute(Some("Maybe")).await.unwrap_err();
        assert!(matches!(err, AppError::UnknownChoice(c) if c == "Maybe"));
        assert!(cast.gateway.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_successful_submission_marks_voted() {
        let cast = CastVote::new(poll(), RecordingGateway::default(), MemoryVoteStore::default());

        cast.execute(Some("Yes")).await.unwrap();

        let submitted = cast.gateway.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].question_id, "q1");
        assert_eq!(submitted[0].choice, "Yes");
        assert!(cast.store.has_voted());
    }

    // Transport success is the only success signal available: the service
    // answers in opaque-response mode, so a delivered-but-dropped vote still
    // counts as submitted here.
    #[tokio::test]
    async fn test_transport_failure_leaves_the_browser_unvoted() {
        let gateway = RecordingGateway {
            fail_submit: true,
            ..RecordingGateway::default()
        };
        let cast = CastVote::new(poll(), gateway, MemoryVoteStore::default());

        let err = cast.execute(Some("No")).await.unwrap_err();
        assert!(matches!(err, AppError::SubmitFailed(_)));
        assert!(!cast.store.has_voted());
    }

    #[tokio::test]
    async fn test_voter_identity_is_stable_across_submissions() {
        let store = MemoryVoteStore::default();
        let first = store.voter_id().unwrap();
        let second = store.voter_id().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reset_reopens_voting_but_keeps_identity() {
        let store = MemoryVoteStore::default();
        let identity = store.voter_id().unwrap();
        store.mark_voted().unwrap();
        assert!(store.has_voted());

        store.reset().unwrap();
        assert!(!store.has_voted());
        assert_eq!(store.voter_id().unwrap(), identity);
    }
}
