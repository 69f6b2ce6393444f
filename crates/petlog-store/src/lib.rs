//! Persisted record store and derived browse queries.

pub mod paths;
pub mod query;
pub mod stats;
pub mod store;

pub use query::{CategoryFilter, filter_records};
pub use stats::{CategoryCounts, ReactionStats, summarize};
pub use store::{DEFAULT_TITLE, RecordStore};
