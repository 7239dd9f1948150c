use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const ID_KEY: &str = "id";
pub const LOCATION_ID_KEY: &str = "locationId";

/// 题目记录
///
/// 只解析 `id` 与 `locationId` 两个字段，其余内容（题干、选项、解析等）
/// 原样保存在 `record` 中，写回时保持原有键顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Quiz {
    id: String,
    location_id: String,
    record: Map<String, Value>,
}

/// 题目记录缺少必需字段或字段类型错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizRecordError {
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),
    #[error("`{0}` must be a string")]
    NotAString(&'static str),
}

impl Quiz {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    #[cfg(test)]
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }

    /// 转换为写入位置库的 JSON 值
    pub fn to_value(&self) -> Value {
        Value::Object(self.record.clone())
    }
}

fn required_str(record: &Map<String, Value>, key: &'static str) -> Result<String, QuizRecordError> {
    match record.get(key) {
        None => Err(QuizRecordError::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(QuizRecordError::NotAString(key)),
    }
}

impl TryFrom<Map<String, Value>> for Quiz {
    type Error = QuizRecordError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_str(&record, ID_KEY)?,
            location_id: required_str(&record, LOCATION_ID_KEY)?,
            record,
        })
    }
}

impl From<Quiz> for Map<String, Value> {
    fn from(quiz: Quiz) -> Self {
        quiz.record
    }
}

/// 批次文件结构 `{ "quizzes": [ ... ] }`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizBatch {
    pub quizzes: Vec<Quiz>,
}
