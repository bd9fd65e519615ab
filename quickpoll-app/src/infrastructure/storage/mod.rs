mod vote_store;

pub use vote_store::LocalVoteStore;
