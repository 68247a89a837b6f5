//! JSON 考试报告

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Student;
use crate::orchestrator::statistics::ExamStatistics;

/// 一次考试的完整结果
#[derive(Debug, Clone, Serialize)]
pub struct ExamReport {
    pub exam_name: String,
    /// 生成时间（RFC 3339，本地时区）
    pub generated_at: String,
    /// 按考试顺序排列
    pub results: Vec<Student>,
    pub statistics: Option<ExamStatistics>,
}

impl ExamReport {
    pub fn new(exam_name: impl Into<String>, results: Vec<Student>) -> Self {
        let statistics = ExamStatistics::from_results(&results);
        Self {
            exam_name: exam_name.into(),
            generated_at: chrono::Local::now().to_rfc3339(),
            results,
            statistics,
        }
    }

    /// 写入 JSON 文件
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("无法创建目录: {}", parent.display()))?;
            }
        }

        let json = serde_json::to_string_pretty(self).context("考试报告序列化失败")?;
        fs::write(path, json).with_context(|| format!("无法写入报告: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    #[test]
    fn test_write_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("report.json");

        let mut s = Student::new(1, "张伟", 85.5);
        s.set_mark(9);
        let report = ExamReport::new("期中考试", vec![s]);
        report.write_json(&path).unwrap();

        let value: JsonValue = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["exam_name"], "期中考试");
        assert_eq!(value["results"][0]["id"], 1);
        assert_eq!(value["results"][0]["mark"], 9);
        assert!(value["results"][0].get("registered_at").is_none());
        assert_eq!(value["statistics"]["count"], 1);
        assert_eq!(value["statistics"]["passed"], 1);
    }

    #[test]
    fn test_empty_report_has_no_statistics() {
        let report = ExamReport::new("空", Vec::new());
        assert!(report.statistics.is_none());
    }
}
