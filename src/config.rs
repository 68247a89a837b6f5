use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::storage::StoreKind;

/// 配置文件路径的环境变量
pub const CONFIG_PATH_VAR: &str = "EXAM_CONFIG";

/// 存储配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 存储类型
    pub kind: StoreKind,
    /// 学生数据文件（仅文件存储使用）
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::File,
            data_file: PathBuf::from("data/students.txt"),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 考试名称
    pub exam_name: String,
    pub store: StoreConfig,
    /// 没有学生时是否写入示例数据
    pub seed_when_empty: bool,
    /// JSON 报告输出路径，不设置则不输出
    pub report_path: Option<PathBuf>,
    /// 日志过滤规则（EnvFilter 语法）
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exam_name: "Rust 程序设计".to_string(),
            store: StoreConfig::default(),
            seed_when_empty: true,
            report_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：配置文件（若 `EXAM_CONFIG` 指定）+ 环境变量覆盖
    ///
    /// 未设置 `EXAM_CONFIG` 时等同于 [`Config::from_env`]
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(Path::new(path.trim()))?
                .with_overrides(|name| std::env::var(name).ok()),
            _ => Self::from_env(),
        }
    }

    /// 只用默认值 + 环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取，缺少的键使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 返回变量值；类型化字段解析失败会报错
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EXAM_NAME") {
            self.exam_name = v;
        }
        if let Some(v) = lookup("EXAM_STORE") {
            self.store.kind = v.parse()?;
        }
        if let Some(v) = lookup("EXAM_DATA_FILE") {
            self.store.data_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("EXAM_SEED_WHEN_EMPTY") {
            self.seed_when_empty = parse_var("EXAM_SEED_WHEN_EMPTY", &v, "bool")?;
        }
        if let Some(v) = lookup("EXAM_REPORT_PATH") {
            self.report_path = if v.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(v))
            };
        }
        if let Some(v) = lookup("RUST_LOG") {
            self.log_filter = v;
        }
        Ok(self)
    }
}

fn parse_var<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default() {
        let cfg = Config::default();
        assert_eq!(cfg.exam_name, "Rust 程序设计");
        assert_eq!(cfg.store.kind, StoreKind::File);
        assert_eq!(cfg.store.data_file, PathBuf::from("data/students.txt"));
        assert!(cfg.seed_when_empty);
        assert!(cfg.report_path.is_none());
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::default()
            .with_overrides(lookup_from(&[
                ("EXAM_NAME", "期末考试"),
                ("EXAM_STORE", "memory"),
                ("EXAM_DATA_FILE", "/tmp/s.txt"),
                ("EXAM_SEED_WHEN_EMPTY", "false"),
                ("EXAM_REPORT_PATH", "out/report.json"),
                ("RUST_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(cfg.exam_name, "期末考试");
        assert_eq!(cfg.store.kind, StoreKind::Memory);
        assert_eq!(cfg.store.data_file, PathBuf::from("/tmp/s.txt"));
        assert!(!cfg.seed_when_empty);
        assert_eq!(cfg.report_path, Some(PathBuf::from("out/report.json")));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn test_bad_override_is_error() {
        let err = Config::default()
            .with_overrides(lookup_from(&[("EXAM_SEED_WHEN_EMPTY", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParseFailed { .. }));

        let err = Config::default()
            .with_overrides(lookup_from(&[("EXAM_STORE", "sqlite")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStoreKind(_)));
    }

    #[test]
    fn test_from_toml_with_partial_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("exam.toml");
        fs::write(
            &path,
            r#"
exam_name = "数据结构"
report_path = "report.json"

[store]
kind = "memory"
"#,
        )
        .unwrap();

        let cfg = Config::from_file(&path).unwrap();
        assert_eq!(cfg.exam_name, "数据结构");
        assert_eq!(cfg.store.kind, StoreKind::Memory);
        assert_eq!(cfg.store.data_file, PathBuf::from("data/students.txt"));
        assert!(cfg.seed_when_empty);
        assert_eq!(cfg.report_path, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_load_reads_config_path_var() {
        // 只有这个测试修改 EXAM_CONFIG
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("exam.toml");
        fs::write(&path, "seed_when_empty = false\n[store]\nkind = \"memory\"\n").unwrap();

        std::env::set_var(CONFIG_PATH_VAR, &path);
        let from_file = Config::load();
        std::env::remove_var(CONFIG_PATH_VAR);

        let cfg = from_file.unwrap();
        assert_eq!(cfg.store.kind, StoreKind::Memory);
        assert!(!cfg.seed_when_empty);

        let cfg = Config::load().unwrap();
        assert_eq!(cfg, Config::from_env().unwrap());
    }

    #[test]
    fn test_from_toml_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            Config::from_file(&dir.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));

        let path = dir.path().join("bad.toml");
        fs::write(&path, "exam_name = [").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse(_))));
    }
}
