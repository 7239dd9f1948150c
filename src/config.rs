use crate::error::{MergeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 可选配置文件名（位于工作目录）
pub const CONFIG_FILE_NAME: &str = "add_quizzes.toml";

/// 一个题目批次文件
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BatchSource {
    /// 日志中显示的名称，例如 "batch 1"
    pub name: String,
    /// 批次主题
    #[serde(default)]
    pub theme: String,
    /// 文件路径（相对路径基于 `root_dir`）
    pub path: PathBuf,
}

impl BatchSource {
    pub fn new(name: impl Into<String>, theme: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            theme: theme.into(),
            path: path.into(),
        }
    }

    /// 日志中的名称，带主题时形如 "batch 1 (priority)"
    pub fn label(&self) -> String {
        if self.theme.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.theme)
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 相对路径的基准目录
    pub root_dir: PathBuf,
    /// 位置库 locations.json
    pub store_path: PathBuf,
    /// 批次目录，按顺序加载
    pub batches: Vec<BatchSource>,
}

const DEFAULT_BATCHES: [(&str, &str); 7] = [
    ("quizzes_batch1_priority.json", "priority"),
    ("quizzes_batch2_cultural_nature.json", "cultural & nature"),
    ("quizzes_batch3_cultural_lakes.json", "cultural & lakes"),
    ("quizzes_batch4_theaters_culture.json", "theaters & culture"),
    ("quizzes_batch5_modern_culture.json", "modern culture"),
    ("quizzes_batch6_entertainment_sports.json", "entertainment & sports"),
    ("quizzes_batch7_sports_entertainment.json", "sports & entertainment"),
];

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            store_path: PathBuf::from("MunichQuest/MunichQuest/Resources/locations.json"),
            batches: DEFAULT_BATCHES
                .iter()
                .enumerate()
                .map(|(i, (path, theme))| BatchSource::new(format!("batch {}", i + 1), *theme, *path))
                .collect(),
        }
    }
}

impl Config {
    /// 以 `root_dir` 为基准的默认配置
    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// 加载配置
    ///
    /// 配置文件不存在时返回默认值；存在但无法解析时报错。
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(config_path).map_err(|e| MergeError::read(config_path, e))?;
        toml::from_str(&content).map_err(|source| MergeError::Config {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// 位置库的实际路径
    pub fn resolved_store_path(&self) -> PathBuf {
        self.root_dir.join(&self.store_path)
    }

    /// 批次文件的实际路径
    pub fn resolve(&self, batch: &BatchSource) -> PathBuf {
        self.root_dir.join(&batch.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let config = Config::default();
        assert_eq!(config.batches.len(), 7);
        assert_eq!(config.batches[0].name, "batch 1");
        assert_eq!(config.batches[0].path, PathBuf::from("quizzes_batch1_priority.json"));
        assert_eq!(
            config.batches[6].path,
            PathBuf::from("quizzes_batch7_sports_entertainment.json")
        );
    }

    #[test]
    fn test_batch_label() {
        let config = Config::default();
        assert_eq!(config.batches[0].label(), "batch 1 (priority)");
        assert_eq!(BatchSource::new("extra", "", "extra.json").label(), "extra");
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.store_path, Config::default().store_path);
    }

    #[test]
    fn test_config_file_overrides_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
store_path = "data/locations.json"

[[batches]]
name = "extra"
path = "extra.json"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.store_path, PathBuf::from("data/locations.json"));
        assert_eq!(config.batches, vec![BatchSource::new("extra", "", "extra.json")]);
        assert_eq!(config.root_dir, PathBuf::from("."));
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "store_path = [").unwrap();

        assert!(matches!(Config::load(&path), Err(MergeError::Config { .. })));
    }
}
