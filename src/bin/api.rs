use anyhow::Context;
use highlight_insight::api::{InsightService, function_handler};
use highlight_insight::core::config::AppConfig;
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;

fn build_service() -> anyhow::Result<InsightService> {
    let config = AppConfig::from_env().context("loading configuration")?;
    let service = InsightService::from_config(&config).context("building API clients")?;
    Ok(service)
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    dotenvy::dotenv().ok();
    highlight_insight::setup_logging();

    let service = build_service()?;
    let service = &service;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(service, event).await
    }))
    .await
}
