use crate::infrastructure::config::{CatApiConfig, ConfigError};
use crate::infrastructure::the_cat_api::TheCatApiClient;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub cat_api: Arc<TheCatApiClient>,
}

impl AppContext {
    pub fn new(config: CatApiConfig) -> Self {
        Self {
            cat_api: Arc::new(TheCatApiClient::new(config)),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = CatApiConfig::from_env()?;
        tracing::info!("Using Cat API at {}", config.base_url);
        Ok(Self::new(config))
    }
}
