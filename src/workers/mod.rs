//! Poller task and the fetches it spawns

pub mod core;
pub mod fetcher;
pub mod poller;
