use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client configuration, baked in at build time since the browser has no
/// process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: Url,
    pub items_per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("invalid page size {0:?}: expected a positive integer")]
    InvalidPageSize(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("MATCHBOOK_API_URL"),
            option_env!("MATCHBOOK_PAGE_SIZE"),
        )
    }

    pub fn from_values(api_url: Option<&str>, page_size: Option<&str>) -> Result<Self, ConfigError> {
        let raw_url = api_url.unwrap_or(DEFAULT_API_URL);
        let mut api_base_url = Url::parse(raw_url).map_err(|source| ConfigError::InvalidUrl {
            value: raw_url.to_string(),
            source,
        })?;

        // Endpoint paths are joined relative to the base, so it must end in a slash
        // or its last segment would be replaced.
        if !api_base_url.path().ends_with('/') {
            let path = format!("{}/", api_base_url.path());
            api_base_url.set_path(&path);
        }

        let items_per_page = match page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidPageSize(raw.to_string()))?,
        };

        Ok(Self {
            api_base_url,
            items_per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.items_per_page, 10);
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = Config::from_values(Some("https://admin.example.com/api"), None).unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://admin.example.com/api/");
    }

    #[test]
    fn rejects_bad_url() {
        let err = Config::from_values(Some("not a url"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_zero_page_size() {
        assert_eq!(
            Config::from_values(None, Some("0")),
            Err(ConfigError::InvalidPageSize("0".into()))
        );
        assert_eq!(Config::from_values(None, Some(" 25 ")).unwrap().items_per_page, 25);
    }
}
