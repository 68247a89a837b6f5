use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::ConfigError;
use crate::storage::{FileStudentStore, InMemoryStudentStore, StudentStore};

/// 存储类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// 内存
    Memory,
    /// 文本文件
    File,
}

impl StoreKind {
    pub fn name(self) -> &'static str {
        match self {
            StoreKind::Memory => "memory",
            StoreKind::File => "file",
        }
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" => Ok(StoreKind::File),
            _ => Err(ConfigError::UnknownStoreKind(s.to_string())),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 按配置创建存储
pub fn create_store(config: &StoreConfig) -> Box<dyn StudentStore> {
    match config.kind {
        StoreKind::Memory => {
            info!("💾 使用内存存储");
            Box::new(InMemoryStudentStore::new())
        }
        StoreKind::File => {
            info!("📁 使用文件存储: {}", config.data_file.display());
            Box::new(FileStudentStore::new(&config.data_file))
        }
    }
}
