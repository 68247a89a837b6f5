//! 文本记录格式
//!
//! 每行一条：`id,name,rating[,mark]`。空行和以 `#` 开头的行会被跳过。

use std::collections::HashSet;

use crate::error::{RecordError, StoreError};
use crate::models::Student;

/// 写文件时的表头
pub const HEADER: &str = "# 格式: ID,姓名,评分,分数";

/// 解析失败的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    /// 行号（从 1 开始）
    pub line_number: usize,
    pub line: String,
    pub error: RecordError,
}

/// 解析一条记录
///
/// 分数可省略；无法解析或超出范围的分数按 0 处理
pub fn parse_record(line: &str) -> Result<Student, RecordError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(RecordError::MissingFields);
    }

    let id: i64 = parts[0]
        .parse()
        .map_err(|_| RecordError::InvalidId(parts[0].to_string()))?;

    let name = parts[1];
    if name.is_empty() {
        return Err(RecordError::EmptyName);
    }

    let rating: f64 = parts[2]
        .parse()
        .ok()
        .filter(|r: &f64| r.is_finite())
        .ok_or_else(|| RecordError::InvalidRating(parts[2].to_string()))?;

    let mut student = Student::new(id, name, rating);
    if let Some(mark) = parts.get(3).and_then(|m| m.parse::<i32>().ok()) {
        student.set_mark(mark);
    }

    Ok(student)
}

/// 解析整个文件内容
///
/// 按字节分行，出错的行（包括非 UTF-8 的行）不会中断解析，而是收集到第二个返回值里
pub fn parse_records(content: &[u8]) -> (Vec<Student>, Vec<RecordIssue>) {
    let mut students = Vec::new();
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
        let decoded = match std::str::from_utf8(raw) {
            Ok(text) => text,
            Err(_) => {
                issues.push(RecordIssue {
                    line_number: idx + 1,
                    line: String::from_utf8_lossy(raw).trim().to_string(),
                    error: RecordError::InvalidEncoding,
                });
                continue;
            }
        };

        let line = decoded.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = parse_record(line).and_then(|student| {
            if seen.insert(student.id) {
                Ok(student)
            } else {
                Err(RecordError::DuplicateId(student.id))
            }
        });

        match parsed {
            Ok(student) => students.push(student),
            Err(error) => issues.push(RecordIssue {
                line_number: idx + 1,
                line: line.to_string(),
                error,
            }),
        }
    }

    (students, issues)
}

/// 格式化为一行（不含换行符），评分保留 1 位小数
pub fn format_record(student: &Student) -> String {
    format!(
        "{},{},{:.1},{}",
        student.id,
        student.name,
        student.rating,
        student.mark()
    )
}

/// 检查学生能否无损地写成一行
pub fn validate_for_write(student: &Student) -> Result<(), StoreError> {
    let reason = if student.name.trim().is_empty() {
        "姓名不能为空"
    } else if student.name != student.name.trim() {
        "姓名首尾不能有空白字符"
    } else if student.name.contains([',', '\n', '\r']) {
        "姓名中不能包含逗号或换行符"
    } else if !student.rating.is_finite() {
        "评分必须是有限数值"
    } else {
        return Ok(());
    };

    Err(StoreError::InvalidRecord {
        id: student.id,
        reason: reason.to_string(),
    })
}
