mod ballot;
mod poll;
mod tally;
mod voter;

pub use ballot::Ballot;
pub use poll::Poll;
pub use tally::{Segment, Tally};
pub use voter::VoterId;
