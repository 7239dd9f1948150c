pub mod consistency;
pub mod merge_service;
pub mod store_writer;

pub use consistency::{check, ConsistencyReport};
pub use merge_service::{group_by_location, merge_quizzes, GroupSummary, LocationGroup, MergeOutcome};
pub use store_writer::StoreWriter;
