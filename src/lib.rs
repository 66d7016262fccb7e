// Gazette: statute revision tracking for a corporate applied-law baseline
//
// This is the library root. Each module corresponds to a major subsystem
// of the tracking pipeline: fetching the national registry, matching it
// against the baseline, and reporting what changed.

pub mod config;
pub mod lawgo;
pub mod matching;
pub mod models;
pub mod output;
pub mod stats;
pub mod status;
pub mod store;
