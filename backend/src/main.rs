use std::sync::Arc;

use backend::{nasa::NasaClient, server, state::AppState, types::Environment};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // JSON format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(env_filter(&environment))
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter(&environment)).init();
        }
    }

    let nasa = Arc::new(NasaClient::new(
        environment.nasa_api_base_url(),
        environment.nasa_api_key(),
    ));

    server::start(environment, AppState { nasa }).await
}

fn env_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.tracing_level().to_string()))
}
