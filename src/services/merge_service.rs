//! 合并服务 - 业务能力层
//!
//! 把批次中的题目并入位置库，分三步：
//! 1. 按 `locationId` 分组（只用于挂载和统计）
//! 2. 按原始顺序插入 `quizzes`，id 已存在则跳过
//! 3. 把每组题目 id 挂到对应位置的 `quizIds` 上

use crate::error::Result;
use crate::models::{Attachment, LocationStore, Quiz};
use std::collections::HashMap;
use tracing::info;

/// 同一位置下的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    pub location_id: String,
    /// 按加载顺序排列，可能包含重复 id
    pub quiz_ids: Vec<String>,
}

/// 按 `locationId` 分组
///
/// 组的顺序为 `locationId` 首次出现的顺序，组内保持加载顺序。
pub fn group_by_location(quizzes: &[Quiz]) -> Vec<LocationGroup> {
    let mut groups: Vec<LocationGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for quiz in quizzes {
        let slot = *index.entry(quiz.location_id()).or_insert_with(|| {
            groups.push(LocationGroup {
                location_id: quiz.location_id().to_string(),
                quiz_ids: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].quiz_ids.push(quiz.id().to_string());
    }

    groups
}

/// 单个位置的合并统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub location_id: String,
    pub quiz_count: usize,
    /// 位置库中是否存在该位置
    pub known: bool,
}

/// 合并结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// 新插入 `quizzes` 的题目数
    pub added: usize,
    /// 新挂到 `quizIds` 的题目数
    pub attached: usize,
    pub groups: Vec<GroupSummary>,
}

impl MergeOutcome {
    /// 涉及的位置数（含位置库中不存在的）
    pub fn locations_updated(&self) -> usize {
        self.groups.len()
    }
}

/// 插入所有尚未存在的题目，返回新插入数量
pub fn insert_quizzes(store: &mut LocationStore, quizzes: &[Quiz]) -> usize {
    let mut added = 0;
    for quiz in quizzes {
        if store.insert_quiz(quiz) {
            added += 1;
            info!("Added quiz: {}", quiz.id());
        }
    }
    added
}

/// 把分组后的题目挂到位置上，返回新挂载数量
///
/// 位置库中不存在的位置直接跳过，不会新建位置。
pub fn attach_groups(store: &mut LocationStore, groups: &[LocationGroup]) -> Result<usize> {
    let mut attached = 0;
    for group in groups {
        if !store.ensure_quiz_ids(&group.location_id)? {
            continue;
        }

        for quiz_id in &group.quiz_ids {
            if store.attach_quiz(&group.location_id, quiz_id)? == Attachment::Added {
                attached += 1;
                info!("Added {} to {}", quiz_id, group.location_id);
            }
        }
    }
    Ok(attached)
}

/// 执行完整合并
pub fn merge_quizzes(store: &mut LocationStore, quizzes: &[Quiz]) -> Result<MergeOutcome> {
    let groups = group_by_location(quizzes);
    let added = insert_quizzes(store, quizzes);
    let attached = attach_groups(store, &groups)?;

    let groups = groups
        .into_iter()
        .map(|group| GroupSummary {
            known: store.has_location(&group.location_id),
            quiz_count: group.quiz_ids.len(),
            location_id: group.location_id,
        })
        .collect();

    Ok(MergeOutcome {
        added,
        attached,
        groups,
    })
}
