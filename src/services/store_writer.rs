//! 位置库写入服务 - 业务能力层
//!
//! 只负责"把位置库写回磁盘"，不关心合并流程

use crate::error::{MergeError, Result};
use crate::models::LocationStore;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// 位置库写入服务
///
/// 整个文件重写：非 ASCII 字符原样输出，两个空格缩进。
/// 不做原子替换，也不保留备份。
pub struct StoreWriter {
    indent: Vec<u8>,
}

impl StoreWriter {
    pub fn new() -> Self {
        Self {
            indent: b"  ".to_vec(),
        }
    }

    /// 序列化为字符串
    #[cfg(test)]
    pub fn render(&self, store: &LocationStore) -> Result<String> {
        let mut buf = Vec::new();
        self.serialize_into(&mut buf, store)
            .map_err(|e| MergeError::json(store.path(), e))?;
        // serde_json 只输出合法 UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// 写回位置库的来源路径
    pub fn write(&self, store: &LocationStore) -> Result<()> {
        self.write_to(store, store.path())
    }

    /// 写入指定路径
    pub fn write_to(&self, store: &LocationStore, path: &Path) -> Result<()> {
        debug!("写入位置库: {}", path.display());

        let file = File::create(path).map_err(|e| MergeError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        self.serialize_into(&mut writer, store)
            .map_err(|e| MergeError::json(path, e))?;
        writer.flush().map_err(|e| MergeError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    fn serialize_into<W: Write>(
        &self,
        writer: W,
        store: &LocationStore,
    ) -> std::result::Result<(), serde_json::Error> {
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(writer, formatter);
        store.serialize(&mut serializer)
    }
}

impl Default for StoreWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_keeps_non_ascii_and_indents_two_spaces() {
        let store = LocationStore::from_json(
            "locations.json",
            json!({"locations": {"L1": {"name": "Englischer Garten – Eisbach", "quizIds": []}}}),
        )
        .unwrap();

        let rendered = StoreWriter::new().render(&store).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"locations\": {\n    \"L1\": {\n      \"name\": \"Englischer Garten – Eisbach\",\n      \"quizIds\": []\n    }\n  },\n  \"quizzes\": {}\n}"
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.json");
        let store = LocationStore::from_json(&path, json!({"locations": {"Münchner Freiheit": {}}}))
            .unwrap();

        StoreWriter::new().write(&store).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Münchner Freiheit"));
        assert!(!written.ends_with('\n'));
    }
}
