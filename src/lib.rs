//! # Exam Queue
//!
//! 按评分排队考试的批处理程序
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - `Student` 及其分数约束
//!
//! ### ② 队列（Queue）
//! - `queue/` - 数组实现的二叉堆，评分高者优先，同分先到先考
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `Exam` 逐个出队、评分、记录结果
//!
//! ### ④ 存储层（Storage）
//! - `storage/` - `StudentStore` 接口，内存 / 文本文件两种实现，启动时由工厂选择
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/` - 存储 → 考试 → 保存 → 统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod queue;
pub mod storage;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, StoreConfig};
pub use error::{ConfigError, ExamError, RecordError, StoreError};
pub use models::{Prioritized, Student};
pub use orchestrator::{run_exam, App, ExamReport, ExamStatistics};
pub use queue::{PriorityQueue, QueueEntry};
pub use storage::{create_store, FileStudentStore, InMemoryStudentStore, StoreKind, StudentStore};
pub use workflow::{grade_for_rating, Exam};
