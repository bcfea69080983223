pub mod config;
pub mod logging;

pub mod cancel;
pub mod download;
pub mod error;
pub mod fetcher;
pub mod materialize;
pub mod outcome;
pub mod progress;
pub mod target;
pub mod tree;
