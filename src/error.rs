use std::path::PathBuf;
use thiserror::Error;

/// 合并流程错误类型
///
/// 所有错误都是致命的：没有任何一处在本地恢复，
/// 一旦出现便在写回 locations.json 之前中止整个流程。
#[derive(Debug, Error)]
pub enum MergeError {
    /// 位置库文件不存在（批次文件缺失不算错误）
    #[error("location store not found: {}", path.display())]
    StoreNotFound { path: PathBuf },

    /// 读取文件失败
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 语法错误
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 缺少必需的顶层键（批次的 `quizzes`、位置库的 `locations`）
    #[error("{}: missing required key `{key}`", path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    /// 记录结构不合法，`at` 为出错元素的 JSON 路径
    #[error("{}: invalid record at `{at}`: {message}", path.display())]
    InvalidRecord {
        path: PathBuf,
        at: String,
        message: String,
    },

    /// 写入文件失败
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl MergeError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        MergeError::Json {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_record(
        path: impl Into<PathBuf>,
        at: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        MergeError::InvalidRecord {
            path: path.into(),
            at: at.into(),
            message: message.into(),
        }
    }
}

/// 合并流程结果类型
pub type Result<T> = std::result::Result<T, MergeError>;
