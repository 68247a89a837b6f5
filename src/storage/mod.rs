//! 存储层
//!
//! 描述"学生数据从哪里来、存到哪里去"，不关心考试流程。
//!
//! - `memory` - 内存存储
//! - `file` - 文本文件存储
//! - `record` - 文本记录的解析与格式化
//! - `factory` - 启动时按配置选择存储实现

pub mod factory;
pub mod file;
pub mod memory;
pub mod record;

pub use factory::{create_store, StoreKind};
pub use file::FileStudentStore;
pub use memory::InMemoryStudentStore;

use crate::error::StoreResult;
use crate::models::Student;

/// 学生存储
///
/// 两种实现的读写约定一致，可以互换
pub trait StudentStore {
    /// 读取全部学生
    ///
    /// 文件存储在文件不存在时返回空列表
    fn get_all(&mut self) -> StoreResult<Vec<Student>>;

    /// 保存单个学生（按 ID 覆盖）
    fn save(&mut self, student: &Student) -> StoreResult<()>;

    /// 批量保存
    fn save_all(&mut self, students: &[Student]) -> StoreResult<()>;

    /// 按 ID 查找
    fn find_by_id(&self, id: i64) -> StoreResult<Student>;

    /// 存储类型
    fn backend(&self) -> StoreKind;
}
