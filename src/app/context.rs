use std::sync::Arc;

use url::Url;

use crate::app::error::Result;
use crate::config::Config;
use crate::generator::http::HttpGenerator;
use crate::generator::Generator;

/// Wires together the configuration and the generation service client.
pub struct AppContext {
    pub config: Config,
    pub generator: Arc<dyn Generator + Send + Sync>,
}

impl AppContext {
    /// Build a context from loaded configuration. A command-line URL
    /// override takes precedence over the configured base URL.
    pub fn new(mut config: Config, api_url: Option<String>) -> Result<Self> {
        if let Some(url) = api_url {
            config.api.base_url = url;
        }
        // Fail early on an unusable base URL.
        Url::parse(&config.api.base_url)?;

        let generator: Arc<dyn Generator + Send + Sync> =
            Arc::new(HttpGenerator::new(&config.api.base_url, config.api.timeout()));

        Ok(Self { config, generator })
    }

    /// Context with an explicit generator, used by tests.
    pub fn with_generator(config: Config, generator: Arc<dyn Generator + Send + Sync>) -> Self {
        Self { config, generator }
    }
}
