#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Google Custom Search credentials. Both halves are required for any call.
#[derive(Clone)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

impl std::fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("api_key", &"[redacted]")
            .field("engine_id", &self.engine_id)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// `None` when either `GOOGLE_API_KEY` or `GOOGLE_CSE_ID` is unset.
    pub search_credentials: Option<SearchCredentials>,
    pub search_base_url: String,
    pub search_timeout_secs: u64,
    pub user_agent: String,
    pub popularity_cache_capacity: usize,
    pub popularity_cache_ttl_secs: u64,
    pub max_keywords: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("search_credentials", &self.search_credentials)
            .field("search_base_url", &self.search_base_url)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("popularity_cache_capacity", &self.popularity_cache_capacity)
            .field("popularity_cache_ttl_secs", &self.popularity_cache_ttl_secs)
            .field("max_keywords", &self.max_keywords)
            .finish()
    }
}
