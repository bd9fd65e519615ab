mod client;

pub use client::TallyServiceClient;
