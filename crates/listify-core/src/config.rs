use crate::app_config::{AppConfig, Environment, SearchCredentials};
use crate::ConfigError;

pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_USER_AGENT: &str = "listify/0.1 (listing-intelligence)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LISTIFY_ENV", "development"))?;
    let log_level = or_default("LISTIFY_LOG_LEVEL", "info");

    let search_credentials = match (non_empty("GOOGLE_API_KEY"), non_empty("GOOGLE_CSE_ID")) {
        (Some(api_key), Some(engine_id)) => Some(SearchCredentials { api_key, engine_id }),
        _ => None,
    };

    let search_base_url = or_default("LISTIFY_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let search_timeout_secs = parse_u64("LISTIFY_SEARCH_TIMEOUT_SECS", "15")?;
    if search_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LISTIFY_SEARCH_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("LISTIFY_USER_AGENT", DEFAULT_USER_AGENT);

    let popularity_cache_capacity = parse_usize("LISTIFY_POPULARITY_CACHE_CAPACITY", "1024")?;
    let popularity_cache_ttl_secs = parse_u64("LISTIFY_POPULARITY_CACHE_TTL_SECS", "300")?;
    let max_keywords = parse_usize("LISTIFY_MAX_KEYWORDS", "15")?;

    Ok(AppConfig {
        env,
        log_level,
        search_credentials,
        search_base_url,
        search_timeout_secs,
        user_agent,
        popularity_cache_capacity,
        popularity_cache_ttl_secs,
        max_keywords,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LISTIFY_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
