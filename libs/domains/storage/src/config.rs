use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or_default};

pub const DEFAULT_PAGE_SIZE: u64 = 2000;
pub const DEFAULT_SEARCH_PATH: &str = "/api/search_storage";

/// Search settings handed to [`StorageService`](crate::StorageService) at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Page size used when a request does not give one
    pub default_page_size: u64,
    /// Path that next-page URLs point at
    pub search_path: String,
}

impl SearchConfig {
    pub fn with_default_page_size(mut self, page_size: u64) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
        }
    }
}

impl FromEnv for SearchConfig {
    /// - SEARCH_DEFAULT_PAGE_SIZE: defaults to 2000
    /// - SEARCH_BASE_PATH: defaults to /api/search_storage
    fn from_env() -> Result<Self, ConfigError> {
        let default_page_size =
            env_parse_or_default("SEARCH_DEFAULT_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())?;
        let search_path = env_or_default("SEARCH_BASE_PATH", DEFAULT_SEARCH_PATH);

        Ok(Self {
            default_page_size,
            search_path,
        })
    }
}
