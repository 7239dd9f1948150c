//! # Add Quizzes
//!
//! 把若干批题目（JSON）合并进位置库 locations.json 的一次性数据准备工具
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、位置库的数据结构和 JSON 加载
//! - `Quiz` - 只解析 `id` / `locationId`，其余字段原样透传
//! - `LocationStore` - 位置库文档，保持原有键顺序
//!
//! ### ② 业务能力层（Services）
//! - `merge_service` - 分组、插入、挂载
//! - `consistency` - 合并后的引用检查（只报告）
//! - `StoreWriter` - 写回位置库
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/app` - 串联加载 → 合并 → 检查 → 写回
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{BatchSource, Config};
pub use error::{MergeError, Result};
pub use models::{LocationStore, Quiz};
pub use orchestrator::{App, RunReport};
