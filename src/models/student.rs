use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// 分数上限
pub const MAX_MARK: u8 = 10;

/// 及格线（分数 >= 6 视为通过）
pub const PASS_MARK: u8 = 6;

/// 进程内的登记序号，只用于评分相同时的先后顺序
static REGISTRATION_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_registration() -> u64 {
    REGISTRATION_SEQ.fetch_add(1, Ordering::Relaxed) + 1
}

/// 可以放进优先队列的元素
///
/// 优先级在入队时读取一次，之后不会再读
pub trait Prioritized {
    fn priority(&self) -> f64;
}

/// 学生
///
/// 只能通过 `new` 创建，分数只能经 `set_mark` 修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    /// 评分，同时也是排队的优先级
    pub rating: f64,
    mark: u8,
    /// 登记序号（单调递增，不是时间戳）
    #[serde(skip)]
    registered_at: u64,
}

impl Student {
    /// 创建新学生，分数初始为 0
    pub fn new(id: i64, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            mark: 0,
            registered_at: next_registration(),
        }
    }

    pub fn mark(&self) -> u8 {
        self.mark
    }

    pub fn registered_at(&self) -> u64 {
        self.registered_at
    }

    /// 设置分数
    ///
    /// 超出 [0, 10] 的值被忽略，原分数保持不变。返回是否写入成功
    pub fn set_mark(&mut self, mark: i32) -> bool {
        match u8::try_from(mark) {
            Ok(m) if m <= MAX_MARK => {
                self.mark = m;
                true
            }
            _ => false,
        }
    }

    /// 是否通过考试
    pub fn passed(&self) -> bool {
        self.mark >= PASS_MARK
    }
}

impl Prioritized for Student {
    fn priority(&self) -> f64 {
        self.rating
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} (评分: {:.1}, 分数: {})",
            self.id, self.name, self.rating, self.mark
        )
    }
}
