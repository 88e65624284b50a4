pub mod client;
pub mod feeds;

pub use client::FeedClient;
