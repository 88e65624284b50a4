pub mod config;
pub mod list;
pub mod me;
pub mod show;
pub mod stats;
