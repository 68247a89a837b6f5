//! 评分规则
//!
//! 按评分区间换算分数（下界包含）：
//!
//! | 评分 | 分数 |
//! |------|------|
//! | >= 90 | 10 |
//! | >= 80 | 9 |
//! | >= 70 | 8 |
//! | >= 60 | 7 |
//! | >= 50 | 6 |
//! | 其他 | 5 |

/// 区间表：(下界, 分数)，按下界从高到低排列
const GRADE_TABLE: [(f64, u8); 5] = [(90.0, 10), (80.0, 9), (70.0, 8), (60.0, 7), (50.0, 6)];

/// 低于所有下界时的分数
const FLOOR_MARK: u8 = 5;

/// 根据评分计算分数
pub fn grade_for_rating(rating: f64) -> u8 {
    GRADE_TABLE
        .iter()
        .find(|(lower, _)| rating >= *lower)
        .map(|(_, mark)| *mark)
        .unwrap_or(FLOOR_MARK)
}
