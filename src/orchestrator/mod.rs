//! 编排层（Orchestration Layer）
//!
//! 按固定顺序串联各项能力，只做调度和统计，不做具体业务判断：
//!
//! ```text
//! json_loader::load_all_batches     (Vec<Quiz>)
//!     ↓
//! json_loader::load_location_store  (LocationStore)
//!     ↓
//! merge_service::merge_quizzes      (MergeOutcome)
//!     ↓
//! consistency::check                (ConsistencyReport)
//!     ↓
//! StoreWriter::write                (locations.json)
//! ```
//!
//! 任何一步失败都会直接返回错误，位置库文件不会被写入。

pub mod app;

pub use app::{App, RunReport};
