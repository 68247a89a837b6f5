//! 带 FIFO 平局规则的优先队列
//!
//! 数组实现的二叉最大堆：
//! - 优先级高的先出队
//! - 优先级相同时，先入队的先出队
//!
//! 优先级在入队时快照到 `QueueEntry` 中，之后修改元素本身不会改变出队顺序，
//! 堆也不会因此重新调整。

use std::cmp::Ordering;

use crate::models::Prioritized;

/// 队列中的一个条目
///
/// 创建后不再修改
#[derive(Debug, Clone)]
pub struct QueueEntry<T> {
    priority: f64,
    sequence: u64,
    item: T,
}

impl<T> QueueEntry<T> {
    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn item(&self) -> &T {
        &self.item
    }
}

// 更大 = 更早出队：先比较优先级，相同时序号小的更大
impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for QueueEntry<T> {}

/// 优先队列
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: Vec<QueueEntry<T>>,
    /// 入队计数器，从 0 开始，只增不减
    counter: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            counter: 0,
        }
    }

    /// 入队，O(log n)
    ///
    /// 优先级取自 `item.priority()`，序号为计数器自增后的值
    pub fn enqueue(&mut self, item: T)
    where
        T: Prioritized,
    {
        self.counter += 1;
        let entry = QueueEntry {
            // -0.0 与 0.0 视为同一优先级
            priority: item.priority() + 0.0,
            sequence: self.counter,
            item,
        };
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// 取出优先级最高的元素，O(log n)
    ///
    /// 队列为空时返回 `None`
    pub fn dequeue(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        // 末尾元素移到根部，再向下调整
        let top = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top.item)
    }

    /// 查看下一个将被取出的元素
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 累计入队次数
    pub fn enqueued_total(&self) -> u64 {
        self.counter
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos] <= self.entries[parent] {
                break;
            }
            self.entries.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.entries[right] > self.entries[left] {
                right
            } else {
                left
            };
            if self.entries[child] <= self.entries[pos] {
                break;
            }
            self.entries.swap(pos, child);
            pos = child;
        }
    }
}
