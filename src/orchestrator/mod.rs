//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `exam_runner` - 考试编排器
//! - 管理应用生命周期（初始化存储、运行、保存）
//! - 加载学生，必要时写入示例数据
//! - 调用 `workflow::Exam` 完成考试
//!
//! ### `statistics` / `report`
//! - 汇总通过人数、平均评分、平均分数
//! - 输出 JSON 报告
//!
//! ## 层次关系
//!
//! ```text
//! exam_runner (处理 Vec<Student>)
//!     ↓
//! workflow::Exam (按优先级逐个考核)
//!     ↓
//! queue::PriorityQueue (排序)
//!
//! exam_runner → storage (读写学生)
//! ```

pub mod exam_runner;
pub mod report;
pub mod statistics;

pub use exam_runner::{run_exam, sample_students, App};
pub use report::ExamReport;
pub use statistics::ExamStatistics;
