use serde::Serialize;

use crate::models::Student;

/// 考试统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExamStatistics {
    pub count: usize,
    /// 分数 >= 6
    pub passed: usize,
    pub failed: usize,
    pub mean_rating: f64,
    pub mean_mark: f64,
}

impl ExamStatistics {
    /// 汇总考试结果，结果为空时返回 `None`
    pub fn from_results(results: &[Student]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }

        let count = results.len();
        let passed = results.iter().filter(|s| s.passed()).count();
        let total_rating: f64 = results.iter().map(|s| s.rating).sum();
        let total_mark: f64 = results.iter().map(|s| f64::from(s.mark())).sum();

        Some(Self {
            count,
            passed,
            failed: count - passed,
            mean_rating: total_rating / count as f64,
            mean_mark: total_mark / count as f64,
        })
    }
}
