use std::env;
use thiserror::Error;

pub const API_URL_VAR: &str = "CAT_API_URL";
pub const API_KEY_VAR: &str = "CAT_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),

    #[error("CAT_API_URL is not a valid http(s) URL: {0}")]
    InvalidUrl(String),
}

/// Where the Cat API lives and the key every request is signed with.
#[derive(Clone)]
pub struct CatApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for CatApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl CatApiConfig {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let parsed = url::Url::parse(base_url.trim())
            .map_err(|e| ConfigError::InvalidUrl(format!("{base_url} ({e})")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = read(API_URL_VAR)?;
        let api_key = read(API_KEY_VAR)?;
        Self::new(&base_url, api_key)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn read(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = CatApiConfig::new("https://api.thecatapi.com/v1/", "key").unwrap();
        assert_eq!(config.base_url, "https://api.thecatapi.com/v1");
        assert_eq!(config.endpoint("/images"), "https://api.thecatapi.com/v1/images");
        assert_eq!(config.endpoint("favourites/7"), "https://api.thecatapi.com/v1/favourites/7");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            CatApiConfig::new("not a url", "key"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            CatApiConfig::new("ftp://example.com", "key"),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = CatApiConfig::new("http://localhost:8080", "secret-key").unwrap();
        assert!(!format!("{config:?}").contains("secret-key"));
    }
}
