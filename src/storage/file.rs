//! 文本文件存储
//!
//! 读：逐行解析，坏行记录警告后跳过。
//! 写：整份重写。先写同目录下的临时文件再重命名，写入失败时原文件保持不变。

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::Student;
use crate::storage::record::{self, HEADER};
use crate::storage::{StoreKind, StudentStore};

/// 文件存储
///
/// 内部缓存在 `get_all` 时用文件内容替换，`find_by_id` 只查缓存
#[derive(Debug)]
pub struct FileStudentStore {
    file_path: PathBuf,
    students: BTreeMap<i64, Student>,
}

impl FileStudentStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            students: BTreeMap::new(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 校验并写入，成功后才更新缓存
    fn commit(&mut self, students: &[Student]) -> StoreResult<()> {
        for student in students {
            record::validate_for_write(student)?;
        }

        let mut next = self.students.clone();
        for student in students {
            next.insert(student.id, student.clone());
        }

        self.write_file(&next)?;
        self.students = next;
        Ok(())
    }

    fn write_file(&self, students: &BTreeMap<i64, Student>) -> StoreResult<()> {
        let mut content = String::with_capacity(32 * (students.len() + 1));
        content.push_str(HEADER);
        content.push('\n');
        for student in students.values() {
            content.push_str(&record::format_record(student));
            content.push('\n');
        }

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(|e| StoreError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.file_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::io(&self.file_path, e));
        }

        debug!(
            "已写入 {} 条记录到 {}",
            students.len(),
            self.file_path.display()
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

impl StudentStore for FileStudentStore {
    fn get_all(&mut self) -> StoreResult<Vec<Student>> {
        let content = match fs::read(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("文件不存在，返回空列表: {}", self.file_path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.file_path, e)),
        };

        let (students, issues) = record::parse_records(&content);
        for issue in &issues {
            warn!(
                "第 {} 行解析失败，已跳过: {} ({})",
                issue.line_number, issue.error, issue.line
            );
        }

        self.students = students.iter().map(|s| (s.id, s.clone())).collect();
        Ok(students)
    }

    fn save(&mut self, student: &Student) -> StoreResult<()> {
        self.commit(std::slice::from_ref(student))
    }

    fn save_all(&mut self, students: &[Student]) -> StoreResult<()> {
        self.commit(students)
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Student> {
        self.students
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn backend(&self) -> StoreKind {
        StoreKind::File
    }
}
