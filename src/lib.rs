//! Finds recent `#spanish` posts on Hive written by low-reputation authors that have
//! received few votes so far.

pub mod api;
pub mod config;
pub mod error;
pub mod hive;
pub mod reputation;
pub mod search;
pub mod server;

pub use error::SearchError;
pub use hive::{Account, HiveApi, HiveClient, HiveError, Post};
pub use reputation::calculate_reputation;
pub use search::{SearchCriteria, SearchOutcome, SearchPipeline};

/// Formats a display reputation the way Hive frontends show it.
pub fn format_reputation(value: f64) -> String {
    format!("{:.2}", value)
}
