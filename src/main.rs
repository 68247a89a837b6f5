use anyhow::Result;
use exam_queue::utils::logging;
use exam_queue::{App, Config};

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(&config.log_filter);

    // 初始化并运行应用
    let mut app = App::initialize(config);
    app.run()?;

    tracing::info!("✓ 考试完成");
    Ok(())
}
