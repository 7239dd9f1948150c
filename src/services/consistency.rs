//! 一致性检查 - 业务能力层
//!
//! iOS 端把 locations.json 解码为 `GameData`：每个位置都必须带 `quizIds`，
//! 题目通过 id 查找。这里只报告问题，不修改数据。

use crate::models::location::QUIZ_IDS_KEY;
use crate::models::quiz::LOCATION_ID_KEY;
use crate::models::LocationStore;
use serde_json::Value;
use tracing::warn;

/// 检查结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// 没有 `quizIds` 的位置
    pub locations_without_quiz_ids: Vec<String>,
    /// (位置 id, 题目 id)：`quizIds` 中引用了不存在的题目
    pub dangling_references: Vec<(String, String)>,
    /// (题目 id, 位置 id)：题目的 `locationId` 不存在
    pub orphan_quizzes: Vec<(String, String)>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.locations_without_quiz_ids.is_empty()
            && self.dangling_references.is_empty()
            && self.orphan_quizzes.is_empty()
    }
}

/// 检查位置库
pub fn check(store: &LocationStore) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    for (location_id, location) in store.locations() {
        match location.get(QUIZ_IDS_KEY).and_then(Value::as_array) {
            None => report.locations_without_quiz_ids.push(location_id.clone()),
            Some(ids) => {
                for quiz_id in ids.iter().filter_map(Value::as_str) {
                    if !store.contains_quiz(quiz_id) {
                        report
                            .dangling_references
                            .push((location_id.clone(), quiz_id.to_string()));
                    }
                }
            }
        }
    }

    for (quiz_id, quiz) in store.quizzes() {
        if let Some(location_id) = quiz.get(LOCATION_ID_KEY).and_then(Value::as_str) {
            if !store.has_location(location_id) {
                report
                    .orphan_quizzes
                    .push((quiz_id.clone(), location_id.to_string()));
            }
        }
    }

    report
}

/// 输出检查结果
pub fn log_report(report: &ConsistencyReport) {
    for location_id in &report.locations_without_quiz_ids {
        warn!("⚠️ Location {} has no quizIds", location_id);
    }
    for (location_id, quiz_id) in &report.dangling_references {
        warn!("⚠️ {} lists unknown quiz {}", location_id, quiz_id);
    }
    for (quiz_id, location_id) in &report.orphan_quizzes {
        warn!("⚠️ Quiz {} points to unknown location {}", quiz_id, location_id);
    }
}
