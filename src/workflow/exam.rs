//! 考试流程 - 流程层
//!
//! 核心职责：按优先队列的顺序依次考核学生
//!
//! 流程顺序：
//! 1. 所有学生入队
//! 2. 逐个出队 → 计算分数 → 写入分数 → 追加到结果
//! 3. 队列清空即考试结束

use std::fmt;

use tracing::info;

use crate::models::Student;
use crate::queue::PriorityQueue;
use crate::workflow::grading::grade_for_rating;

/// 一次考试
///
/// - 独占自己的优先队列
/// - 结果顺序即出队顺序
/// - 已出队的学生不会再回到队列
#[derive(Debug, Default)]
pub struct Exam {
    name: String,
    queue: PriorityQueue<Student>,
    results: Vec<Student>,
}

impl Exam {
    /// 创建新的考试
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: PriorityQueue::new(),
            results: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 学生加入考试队列
    pub fn add_student(&mut self, student: Student) {
        self.queue.enqueue(student);
    }

    /// 考核队首的一名学生
    ///
    /// 队列为空时返回 `None`。任意次调用之后，结果都是最终顺序的前缀，
    /// 队列中恰好是剩下的学生
    pub fn examine_next(&mut self) -> Option<&Student> {
        let mut student = self.queue.dequeue()?;

        let mark = grade_for_rating(student.rating);
        student.set_mark(i32::from(mark));

        let position = self.results.len() + 1;
        info!(
            "{}. {} 参加考试... 获得分数: {}",
            position, student.name, mark
        );

        self.results.push(student);
        self.results.last()
    }

    /// 进行考试，直到队列清空
    ///
    /// 返回本次调用考核的学生数。队列为空时什么也不做
    pub fn conduct(&mut self) -> usize {
        if self.queue.is_empty() {
            return 0;
        }

        info!("📝 开始考试: {}", self.name);
        info!("考试顺序（按评分）:");

        let mut examined = 0;
        while self.examine_next().is_some() {
            examined += 1;
        }

        info!("✓ 考试结束，共 {} 名学生参加", self.results.len());
        examined
    }

    /// 考试结果（按考核顺序）
    pub fn results(&self) -> &[Student] {
        &self.results
    }

    pub fn into_results(self) -> Vec<Student> {
        self.results
    }

    /// 队列中剩余的学生数
    pub fn queue_size(&self) -> usize {
        self.queue.len()
    }
}

impl fmt::Display for Exam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "考试 '{}', 队列中学生: {}", self.name, self.queue_size())
    }
}
