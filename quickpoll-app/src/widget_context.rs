use std::sync::Arc;

use crate::application::{CastVote, LoadResults};
use crate::config;
use crate::domain::Poll;
use crate::infrastructure::storage::LocalVoteStore;
use crate::infrastructure::tally_service::TallyServiceClient;

/// Everything the UI needs, wired to the browser-backed infrastructure.
/// Provided once at mount via Leptos context.
#[derive(Clone)]
pub struct WidgetContext {
    pub poll: Poll,
    pub store: LocalVoteStore,
    pub cast_vote: Arc<CastVote<TallyServiceClient, LocalVoteStore>>,
    pub load_results: Arc<LoadResults<TallyServiceClient>>,
}

impl WidgetContext {
    pub fn from_config() -> Self {
        let poll = config::default_poll();
        let client = TallyServiceClient::new(config::endpoint_url());
        let store = LocalVoteStore::new();

        Self {
            cast_vote: Arc::new(CastVote::new(poll.clone(), client.clone(), store)),
            load_results: Arc::new(LoadResults::new(client)),
            poll,
            store,
        }
    }
}
