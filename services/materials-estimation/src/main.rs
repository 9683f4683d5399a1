//! materials-estimation 开发运行器
//!
//! 读取一个 JSON 估算请求（文件路径参数或标准输入），输出 JSON 结果。

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use common::OwnerId;
use config::EstimatorConfig;
use tracing::info;

use materials_estimation::application::{EstimateInput, EstimationHandler};
use materials_estimation::infrastructure::persistence::InMemoryCatalogRepository;
use materials_estimation::infrastructure::seed;
use materials_estimation::infrastructure::usage_worker::UsageIntelligenceWorker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("ESTIMATOR_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = EstimatorConfig::load(&config_dir).context("failed to load configuration")?;
    telemetry::init(&config.telemetry.log_level, config.telemetry.json);
    info!(app = %config.app_name, env = %config.app_env, "Starting materials estimation runner");

    let catalog = Arc::new(InMemoryCatalogRepository::new(seed::global_snapshot()?));
    let (feed, reader, worker) = UsageIntelligenceWorker::spawn(&config.usage);
    let handler = EstimationHandler::new(catalog, reader, &config);

    let input = read_input(std::env::args().nth(1))?;
    let input: EstimateInput = serde_json::from_str(&input).context("invalid estimate request")?;

    if input.has_history() {
        feed.push_raw_jobs(input.jobs).await?;
        feed.push_raw_invoices(input.invoices).await?;
    }
    // 关闭推送端后，后台任务发布最后一次快照并退出
    drop(feed);
    worker.await.context("usage worker panicked")?;

    let owner = OwnerId::new();
    let response = handler.execute(&owner, input.request).await?;
    info!(items = response.len(), "Estimate complete");

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_input(path: Option<String>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}")),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
