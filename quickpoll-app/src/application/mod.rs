mod cast_vote;
mod gateway;
mod load_results;
mod submission;

pub use cast_vote::CastVote;
pub use gateway::{TallyGateway, VoteStorage};
pub use load_results::LoadResults;
pub use submission::SubmissionState;
