//! Environment configuration for different deployment stages

use std::env;

use tracing::Level;

/// Base endpoint for NASA's Open APIs
const DEFAULT_NASA_API_BASE_URL: &str = "https://api.nasa.gov";

/// Public demo credential NASA accepts from unregistered callers.
/// Subject to much stricter upstream rate limits than a registered key.
const DEMO_API_KEY: &str = "DEMO_KEY";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the NASA API credential from `NASA_API_KEY`, falling back to
    /// the public demo key when the variable is not set
    #[must_use]
    pub fn nasa_api_key(&self) -> String {
        env::var("NASA_API_KEY").unwrap_or_else(|_| DEMO_API_KEY.to_string())
    }

    /// Returns the upstream base endpoint
    ///
    /// `NASA_API_BASE_URL` overrides the default; tests use it to point the
    /// client at a local mock server.
    #[must_use]
    pub fn nasa_api_base_url(&self) -> String {
        env::var("NASA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_NASA_API_BASE_URL.to_string())
    }

    /// Default log level when `RUST_LOG` is not set
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
