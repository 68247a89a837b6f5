use std::collections::BTreeMap;

use crate::error::{StoreError, StoreResult};
use crate::models::Student;
use crate::storage::{StoreKind, StudentStore};

/// 内存存储，进程结束即丢失
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    students: BTreeMap<i64, Student>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl StudentStore for InMemoryStudentStore {
    /// 按登记顺序返回
    fn get_all(&mut self) -> StoreResult<Vec<Student>> {
        let mut students: Vec<Student> = self.students.values().cloned().collect();
        students.sort_by_key(Student::registered_at);
        Ok(students)
    }

    fn save(&mut self, student: &Student) -> StoreResult<()> {
        self.students.insert(student.id, student.clone());
        Ok(())
    }

    fn save_all(&mut self, students: &[Student]) -> StoreResult<()> {
        for student in students {
            self.students.insert(student.id, student.clone());
        }
        Ok(())
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Student> {
        self.students
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn backend(&self) -> StoreKind {
        StoreKind::Memory
    }
}
