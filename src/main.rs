// ==========================================
// 生产计划与库存分析引擎 - 命令行入口
// ==========================================
// 用法: production-analytics [配置文件路径]
// 输出: 默认场景评估报告 (JSON, stdout); 日志写 stderr
// ==========================================

use anyhow::Context;
use production_analytics::api::{PlanningApi, ScenarioRequest};
use production_analytics::config::ConfigManager;
use production_analytics::logging;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", production_analytics::APP_NAME);
    tracing::info!("系统版本: {}", production_analytics::VERSION);
    tracing::info!("==================================================");

    let explicit_path = std::env::args().nth(1).map(PathBuf::from);
    let manager = ConfigManager::load(explicit_path.as_deref()).context("加载配置失败")?;
    match manager.source() {
        Some(path) => tracing::info!("使用配置文件: {}", path.display()),
        None => tracing::info!("使用内置默认配置"),
    }

    let api = PlanningApi::new(manager.into_config()).context("初始化 PlanningApi 失败")?;
    let report = api
        .evaluate(&ScenarioRequest::default())
        .context("场景评估失败")?;

    let json = serde_json::to_string_pretty(&report).context("报告序列化失败")?;
    println!("{}", json);

    Ok(())
}
