//! 错误类型定义
//!
//! 领域层使用带类型的错误枚举，应用入口（`main` / `App::run`）统一转换为 `anyhow::Error`

use std::path::PathBuf;

use thiserror::Error;

/// 学生存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 文件读写失败（文件不存在不算错误）
    #[error("文件操作失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 按 ID 查找不到学生
    #[error("ID 为 {id} 的学生不存在")]
    NotFound { id: i64 },

    /// 记录无法按行格式写出
    #[error("学生 {id} 的记录无法保存: {reason}")]
    InvalidRecord { id: i64, reason: String },
}

impl StoreError {
    /// 创建 I/O 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// 单行记录解析错误
///
/// 只在本地恢复：出错的行会被记录并跳过
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("格式错误，应为: id,name,rating[,mark]")]
    MissingFields,

    #[error("无效的 ID: '{0}'")]
    InvalidId(String),

    #[error("姓名不能为空")]
    EmptyName,

    #[error("无效的评分: '{0}'")]
    InvalidRating(String),

    #[error("ID {0} 在文件中重复出现")]
    DuplicateId(i64),

    #[error("该行不是有效的 UTF-8 文本")]
    InvalidEncoding,
}

/// 考试流程错误
#[derive(Debug, Error)]
pub enum ExamError {
    /// 没有可参加考试的学生
    #[error("考试 '{exam}' 没有学生")]
    EmptyInput { exam: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("无法读取配置文件 {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },

    #[error("未知的存储类型: '{0}' (可选: memory, file)")]
    UnknownStoreKind(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type ExamResult<T> = Result<T, ExamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_includes_path() {
        let err = StoreError::io(
            "data/students.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("data/students.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_exam_error_wraps_store_error() {
        let err: ExamError = StoreError::NotFound { id: 7 }.into();
        assert!(matches!(err, ExamError::Store(StoreError::NotFound { id: 7 })));
        assert_eq!(err.to_string(), "ID 为 7 的学生不存在");
    }
}
