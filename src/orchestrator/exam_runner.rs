//! 考试编排器 - 编排层
//!
//! ## 职责
//!
//! 把存储、考试流程、持久化串起来：
//!
//! 1. **加载学生**：从存储读取，为空时按配置写入示例数据
//! 2. **进行考试**：全部入队后一次性考完
//! 3. **保存结果**：分数写回存储（I/O 失败直接中止）
//! 4. **输出统计**：打印汇总，按配置写出 JSON 报告
//!
//! 本层不做评分和排序，只做调度和统计

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ExamError, ExamResult};
use crate::models::Student;
use crate::orchestrator::report::ExamReport;
use crate::storage::{create_store, StudentStore};
use crate::utils::logging;
use crate::workflow::Exam;

/// 示例数据：(ID, 姓名, 评分)
const SAMPLE_STUDENTS: [(i64, &str, f64); 5] = [
    (1, "张伟", 85.5),
    (2, "李娜", 92.0),
    (3, "王芳", 78.3),
    (4, "刘洋", 92.0),
    (5, "陈静", 88.7),
];

/// 示例学生
pub fn sample_students() -> Vec<Student> {
    SAMPLE_STUDENTS
        .iter()
        .map(|&(id, name, rating)| Student::new(id, name, rating))
        .collect()
}

/// 进行一次考试
///
/// 学生按传入顺序入队，评分相同时先入队的先考
pub fn run_exam(exam_name: &str, students: Vec<Student>) -> ExamResult<Exam> {
    if students.is_empty() {
        return Err(ExamError::EmptyInput {
            exam: exam_name.to_string(),
        });
    }

    let mut exam = Exam::new(exam_name);
    for student in students {
        exam.add_student(student);
    }
    info!("✓ 考试队列已生成，共 {} 名学生", exam.queue_size());

    exam.conduct();
    Ok(exam)
}

/// 应用主结构
pub struct App {
    config: Config,
    store: Box<dyn StudentStore>,
}

impl App {
    /// 初始化应用，按配置选择存储
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config);
        let store = create_store(&config.store);
        Self { config, store }
    }

    /// 使用指定的存储（测试或嵌入时使用）
    pub fn with_store(config: Config, store: Box<dyn StudentStore>) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }

    /// 运行应用主逻辑
    pub fn run(&mut self) -> Result<ExamReport> {
        let students = self.load_students()?;

        logging::log_section(&format!("开始考试: {}", self.config.exam_name));
        let exam = run_exam(&self.config.exam_name, students)?;

        self.store
            .save_all(exam.results())
            .context("保存考试结果失败")?;
        info!("✓ 考试结果已保存 ({})", self.store.backend());

        let report = ExamReport::new(self.config.exam_name.as_str(), exam.into_results());
        match &report.statistics {
            Some(stats) => logging::print_statistics(stats),
            None => warn!("⚠️ 没有可统计的结果"),
        }

        if let Some(path) = &self.config.report_path {
            report.write_json(path)?;
            info!("📄 考试报告已写入: {}", path.display());
        }

        Ok(report)
    }

    /// 加载学生，为空时按配置写入示例数据
    fn load_students(&mut self) -> Result<Vec<Student>> {
        info!("\n📁 正在加载学生...");
        let students = self.store.get_all().context("加载学生失败")?;

        if !students.is_empty() {
            logging::log_students_loaded(students.len());
            return Ok(students);
        }

        if !self.config.seed_when_empty {
            warn!("⚠️ 存储中没有学生");
            return Ok(students);
        }

        let samples = sample_students();
        for student in &samples {
            self.store
                .save(student)
                .with_context(|| format!("保存示例学生失败: {}", student.name))?;
        }
        info!("⚠️ 存储中没有学生，已添加 {} 名示例学生", samples.len());
        Ok(samples)
    }
}
