//! 日志工具模块
//!
//! 负责初始化日志订阅器，以及输出格式化的提示信息

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::orchestrator::ExamStatistics;

/// 初始化日志
///
/// # 参数
/// - `filter`: EnvFilter 语法的过滤规则，无法解析时退回 `info`
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 考试管理系统启动");
    info!("📚 考试名称: {}", config.exam_name);
    info!("💾 存储类型: {}", config.store.kind);
    info!("{}", "=".repeat(60));
}

/// 记录分段标题
pub fn log_section(title: &str) {
    info!("\n{}", "=".repeat(60));
    info!("{}", title);
    info!("{}", "=".repeat(60));
}

/// 记录学生加载信息
pub fn log_students_loaded(total: usize) {
    info!("✓ 已加载 {} 名学生", total);
}

/// 打印考试统计
///
/// # 参数
/// - `stats`: 考试统计
pub fn print_statistics(stats: &ExamStatistics) {
    info!("\n{}", "=".repeat(60));
    info!("📊 考试统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("学生总数: {}", stats.count);
    info!("✅ 通过: {}", stats.passed);
    info!("❌ 未通过: {}", stats.failed);
    info!("平均评分: {:.2}", stats.mean_rating);
    info!("平均分数: {:.2}", stats.mean_mark);
    info!("{}", "=".repeat(60));
}
