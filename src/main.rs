mod app;
mod claims;
mod config;
mod cors;
mod error;
mod health;
mod hello;
mod invocation;
#[cfg(test)]
mod test_support;
mod user_info;

use crate::config::ApiConfig;
use lambda_http::{run, tracing, Error};
use std::env::set_var;

const IGNORE_STAGE_IN_PATH: &str = "AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH";

/// Routes are matched without the API Gateway stage prefix.
fn ignore_stage_in_path() {
    set_var(IGNORE_STAGE_IN_PATH, "true");
}

// The environment is mutated before the runtime starts its worker threads.
fn main() -> Result<(), Error> {
    ignore_stage_in_path();
    serve()
}

#[tokio::main]
async fn serve() -> Result<(), Error> {
    let config = ApiConfig::from_env()?;

    tracing_subscriber::fmt()
        .json()
        .with_max_level(config.log_level)
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .init();

    tracing::info!(
        service = %config.service_name,
        trusted_origin = ?config.trusted_origin,
        "starting"
    );

    run(app::router(config)).await
}
