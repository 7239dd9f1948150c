//! 位置库文档模型
//!
//! 文档形如 `{ "locations": { <id>: <Location> }, "quizzes": { <id>: <Quiz> } }`，
//! 其余顶层键原样保留。写回时保持读入时的键顺序，
//! 缺失的 `quizzes` 追加在末尾。

use crate::error::{MergeError, Result};
use crate::models::quiz::Quiz;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const LOCATIONS_KEY: &str = "locations";
pub const QUIZZES_KEY: &str = "quizzes";
pub const QUIZ_IDS_KEY: &str = "quizIds";

/// 顶层键的位置
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Locations,
    Quizzes,
    Other(String, Value),
}

/// 位置库
#[derive(Debug, Clone, PartialEq)]
pub struct LocationStore {
    path: PathBuf,
    locations: Map<String, Value>,
    quizzes: Map<String, Value>,
    layout: Vec<Slot>,
}

/// 一次挂载操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    /// 新加入 quizIds
    Added,
    /// quizIds 中已存在
    AlreadyPresent,
    /// 位置不存在，未挂载
    UnknownLocation,
}

impl LocationStore {
    /// 从已解析的 JSON 构建位置库
    ///
    /// # 参数
    /// - `path`: 文档来源路径，写回时使用
    /// - `document`: 解析后的 JSON
    pub fn from_json(path: impl Into<PathBuf>, document: Value) -> Result<Self> {
        let path = path.into();
        let Value::Object(document) = document else {
            return Err(MergeError::invalid_record(path, "$", "document must be an object"));
        };

        let mut locations = None;
        let mut quizzes = None;
        let mut layout = Vec::with_capacity(document.len() + 1);

        for (key, value) in document {
            match key.as_str() {
                LOCATIONS_KEY => {
                    locations = Some(expect_object(&path, LOCATIONS_KEY, value)?);
                    layout.push(Slot::Locations);
                }
                QUIZZES_KEY => {
                    quizzes = Some(expect_object(&path, QUIZZES_KEY, value)?);
                    layout.push(Slot::Quizzes);
                }
                _ => layout.push(Slot::Other(key, value)),
            }
        }

        let locations = locations.ok_or_else(|| MergeError::MissingKey {
            path: path.clone(),
            key: LOCATIONS_KEY,
        })?;

        let quizzes = match quizzes {
            Some(quizzes) => quizzes,
            None => {
                layout.push(Slot::Quizzes);
                Map::new()
            }
        };

        Ok(Self {
            path,
            locations,
            quizzes,
            layout,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn locations(&self) -> &Map<String, Value> {
        &self.locations
    }

    pub fn quizzes(&self) -> &Map<String, Value> {
        &self.quizzes
    }

    pub fn has_location(&self, location_id: &str) -> bool {
        self.locations.contains_key(location_id)
    }

    pub fn contains_quiz(&self, quiz_id: &str) -> bool {
        self.quizzes.contains_key(quiz_id)
    }

    /// 插入题目；id 已存在时不覆盖，返回 false
    pub fn insert_quiz(&mut self, quiz: &Quiz) -> bool {
        if self.contains_quiz(quiz.id()) {
            return false;
        }
        self.quizzes.insert(quiz.id().to_string(), quiz.to_value());
        true
    }

    /// 位置的 quizIds（不存在时为 None）
    #[cfg(test)]
    pub fn quiz_ids(&self, location_id: &str) -> Option<Vec<&str>> {
        self.locations
            .get(location_id)?
            .get(QUIZ_IDS_KEY)?
            .as_array()
            .map(|ids| ids.iter().filter_map(Value::as_str).collect())
    }

    /// 确保位置存在 quizIds 字段；位置不存在时返回 false
    ///
    /// 只有真正挂载到的位置才检查结构：位置必须是对象。
    pub fn ensure_quiz_ids(&mut self, location_id: &str) -> Result<bool> {
        let Some(location) = self.locations.get_mut(location_id) else {
            return Ok(false);
        };
        let Some(location) = location.as_object_mut() else {
            return Err(MergeError::invalid_record(
                &self.path,
                format!("{LOCATIONS_KEY}.{location_id}"),
                "location must be an object",
            ));
        };

        location
            .entry(QUIZ_IDS_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));
        Ok(true)
    }

    /// 把题目 id 挂到位置的 quizIds 上，已存在时不重复添加
    pub fn attach_quiz(&mut self, location_id: &str, quiz_id: &str) -> Result<Attachment> {
        if !self.ensure_quiz_ids(location_id)? {
            return Ok(Attachment::UnknownLocation);
        }

        let ids = self
            .locations
            .get_mut(location_id)
            .and_then(|location| location.get_mut(QUIZ_IDS_KEY))
            .and_then(Value::as_array_mut);
        let Some(ids) = ids else {
            return Err(MergeError::invalid_record(
                &self.path,
                format!("{LOCATIONS_KEY}.{location_id}.{QUIZ_IDS_KEY}"),
                "must be an array",
            ));
        };

        if ids.iter().any(|id| id.as_str() == Some(quiz_id)) {
            return Ok(Attachment::AlreadyPresent);
        }
        ids.push(Value::String(quiz_id.to_string()));
        Ok(Attachment::Added)
    }
}

fn expect_object(path: &Path, key: &str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(MergeError::invalid_record(path, key, "must be an object")),
    }
}

impl Serialize for LocationStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.layout.len()))?;
        for slot in &self.layout {
            match slot {
                Slot::Locations => map.serialize_entry(LOCATIONS_KEY, &self.locations)?,
                Slot::Quizzes => map.serialize_entry(QUIZZES_KEY, &self.quizzes)?,
                Slot::Other(key, value) => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(document: Value) -> LocationStore {
        LocationStore::from_json("locations.json", document).unwrap()
    }

    #[test]
    fn test_missing_quizzes_is_appended_last() {
        let store = store(json!({"version": 2, "locations": {"L1": {}}}));
        assert_eq!(
            serde_json::to_string(&store).unwrap(),
            r#"{"version":2,"locations":{"L1":{}},"quizzes":{}}"#
        );
    }

    #[test]
    fn test_layout_preserved() {
        let store = store(json!({"quizzes": {}, "meta": "x", "locations": {}}));
        assert_eq!(
            serde_json::to_string(&store).unwrap(),
            r#"{"quizzes":{},"meta":"x","locations":{}}"#
        );
    }

    #[test]
    fn test_missing_locations() {
        let err = LocationStore::from_json("locations.json", json!({"quizzes": {}})).unwrap_err();
        assert!(matches!(err, MergeError::MissingKey { key: LOCATIONS_KEY, .. }));
    }

    #[test]
    fn test_document_must_be_object() {
        let err = LocationStore::from_json("locations.json", json!([{"locations": {}}]))
            .unwrap_err();
        assert!(matches!(err, MergeError::InvalidRecord { .. }));
    }

    #[test]
    fn test_quizzes_must_be_object() {
        let err = LocationStore::from_json(
            "locations.json",
            json!({"locations": {}, "quizzes": ["Q1"]}),
        )
        .unwrap_err();
        match err {
            MergeError::InvalidRecord { at, .. } => assert_eq!(at, QUIZZES_KEY),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_untouched_odd_locations_are_kept() {
        let mut store = store(json!({
            "locations": {"L1": 3, "L2": {"quizIds": [1, "Q0"]}, "L3": {}}
        }));

        assert_eq!(store.attach_quiz("L3", "Q3").unwrap(), Attachment::Added);
        assert_eq!(store.locations()["L1"], 3);
        assert_eq!(store.locations()["L2"]["quizIds"], json!([1, "Q0"]));
    }

    #[test]
    fn test_attach_to_non_object_location_fails() {
        let mut store = store(json!({"locations": {"L1": 3}}));

        let err = store.attach_quiz("L1", "Q1").unwrap_err();
        assert!(matches!(err, MergeError::InvalidRecord { .. }));
        assert!(err.to_string().contains("locations.L1"));
    }

    #[test]
    fn test_attach_to_non_array_quiz_ids_fails() {
        let mut store = store(json!({"locations": {"L1": {"quizIds": "Q1"}}}));

        let err = store.attach_quiz("L1", "Q2").unwrap_err();
        assert!(err.to_string().contains("locations.L1.quizIds"));
    }

    #[test]
    fn test_attach_skips_non_string_entries() {
        let mut store = store(json!({"locations": {"L1": {"quizIds": [7, "Q1"]}}}));

        assert_eq!(store.attach_quiz("L1", "Q1").unwrap(), Attachment::AlreadyPresent);
        assert_eq!(store.attach_quiz("L1", "Q2").unwrap(), Attachment::Added);
        assert_eq!(store.locations()["L1"]["quizIds"], json!([7, "Q1", "Q2"]));
    }

    #[test]
    fn test_insert_quiz_first_wins() {
        let mut store = store(json!({"locations": {}}));
        let first: Quiz =
            serde_json::from_value(json!({"id": "Q1", "locationId": "L1", "v": 1})).unwrap();
        let second: Quiz =
            serde_json::from_value(json!({"id": "Q1", "locationId": "L1", "v": 2})).unwrap();

        assert!(store.insert_quiz(&first));
        assert!(!store.insert_quiz(&second));
        assert_eq!(store.quizzes()["Q1"]["v"], 1);
    }

    #[test]
    fn test_attach_quiz() {
        let mut store = store(json!({"locations": {"L1": {"name": "Marienplatz"}}}));

        assert_eq!(store.attach_quiz("L1", "Q1").unwrap(), Attachment::Added);
        assert_eq!(store.attach_quiz("L1", "Q1").unwrap(), Attachment::AlreadyPresent);
        assert_eq!(store.attach_quiz("L9", "Q2").unwrap(), Attachment::UnknownLocation);

        assert_eq!(store.quiz_ids("L1"), Some(vec!["Q1"]));
        assert!(!store.has_location("L9"));
        assert_eq!(
            serde_json::to_string(&store.locations()["L1"]).unwrap(),
            r#"{"name":"Marienplatz","quizIds":["Q1"]}"#
        );
    }
}
