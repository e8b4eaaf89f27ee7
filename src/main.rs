mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod page;
mod parameter_store;
mod routes;
mod state;

use anyhow::Context;
use config::Config;
use parameter_store::SsmParameterStore;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(config::running_in_lambda());

    tracing::info!("dynamic-string-page starting");

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!("Invalid configuration: {:#}", e);
    })?;
    config.log_startup();

    let state = AppState {
        store: Arc::new(SsmParameterStore::from_config(&config)),
        config: Arc::new(config),
    };
    let in_lambda = state.config.in_lambda();
    let addr = format!("{}:{}", state.config.service_host, state.config.service_port);
    let app = app::router(state);

    if in_lambda {
        lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime error: {}", e))?;
    } else {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);
        axum::serve(listener, app)
            .await
            .context("Server error")?;
    }

    Ok(())
}

fn init_tracing(in_lambda: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if in_lambda {
        // CloudWatch timestamps each line and does not render colours
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
