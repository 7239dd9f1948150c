use crate::config::Config;
use crate::error::{MergeError, Result};
use crate::models::location::{LocationStore, QUIZZES_KEY};
use crate::models::quiz::{Quiz, QuizBatch};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 读取并解析 JSON 文件
pub fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::read(path, e))?;
    serde_json::from_str(&content).map_err(|e| MergeError::json(path, e))
}

/// 从单个批次文件加载题目
///
/// 文件必须包含 `quizzes` 数组，每个元素都要有 `id` 和 `locationId`。
pub fn load_batch(path: &Path) -> Result<Vec<Quiz>> {
    let document = read_json(path)?;

    if document.get(QUIZZES_KEY).is_none() {
        return Err(MergeError::MissingKey {
            path: path.to_path_buf(),
            key: QUIZZES_KEY,
        });
    }

    let batch: QuizBatch = serde_path_to_error::deserialize(document).map_err(|e| {
        MergeError::invalid_record(path, e.path().to_string(), e.inner().to_string())
    })?;

    Ok(batch.quizzes)
}

/// 按配置中的顺序加载所有批次
///
/// 不存在的批次文件直接跳过；存在但无法解析的文件会中止整个流程。
/// 返回所有题目，按批次顺序、文件内顺序拼接，不做去重。
pub fn load_all_batches(config: &Config) -> Result<Vec<Quiz>> {
    let mut all_quizzes = Vec::new();

    for batch in &config.batches {
        let path = config.resolve(batch);
        if !path.exists() {
            debug!("跳过不存在的批次文件: {}", path.display());
            continue;
        }

        let quizzes = load_batch(&path)?;
        info!("Loaded {} quizzes from {}", quizzes.len(), batch.label());
        all_quizzes.extend(quizzes);
    }

    Ok(all_quizzes)
}

/// 加载位置库
///
/// 文件必须存在；缺少 `quizzes` 时补一个空映射。
pub fn load_location_store(path: &Path) -> Result<LocationStore> {
    if !path.exists() {
        return Err(MergeError::StoreNotFound {
            path: path.to_path_buf(),
        });
    }

    let document = read_json(path)?;
    LocationStore::from_json(path, document)
}
