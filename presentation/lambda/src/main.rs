//! Serverless entry point for ZapGPT
//!
//! Loads configuration once per process, then hands every gateway event to
//! the core handler with a shared, read-only OpenAI connector.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zapgpt_connector_openai::OpenAiConnector;
use zapgpt_core::prelude::*;

mod config;

use config::LambdaConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        // CloudWatch adds ingestion time and the target is noise
        .with_target(false)
        .without_time()
        .init();

    info!("Starting ZapGPT with {:?}", config);

    let connector = OpenAiConnector::new(config.openai()).map_err(|e| {
        error!("Failed to initialize OpenAI connector: {}", e);
        e
    })?;
    let connector = Arc::new(connector);

    run(service_fn(move |event: LambdaEvent<InboundEvent>| {
        let connector = Arc::clone(&connector);
        async move { function_handler(connector.as_ref(), event).await }
    }))
    .await
}

async fn function_handler(
    connector: &OpenAiConnector,
    event: LambdaEvent<InboundEvent>,
) -> Result<OutboundResponse, Error> {
    info!("Handling request {}", event.context.request_id);
    Ok(handle(connector, event.payload).await)
}
