use super::dispatcher::FailurePolicy;

/* Config holds everything the bot needs at startup.
 * It is built once in main and threaded through explicitly.
 * The token is the only value read from the environment.
 */

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const SNAPSHOT_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";
pub const RATES_URL: &str = "https://api.frankfurter.app/latest";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set, add it to the environment or a .env file")]
    MissingToken(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub snapshot_url: String,
    pub rates_url: String,
    pub failure_policy: FailurePolicy,
}

impl Config {
    // Requires the bot token. Call after the .env file has been loaded.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_token(std::env::var(BOT_TOKEN_VAR).ok())
    }

    pub fn from_token(token: Option<String>) -> Result<Config, ConfigError> {
        match token {
            Some(token) if !token.trim().is_empty() => Ok(Config {
                bot_token: token,
                snapshot_url: SNAPSHOT_URL.to_string(),
                rates_url: RATES_URL.to_string(),
                failure_policy: FailurePolicy::default(),
            }),
            _ => Err(ConfigError::MissingToken(BOT_TOKEN_VAR)),
        }
    }
}

// Logger filters: RUST_LOG when set, otherwise info so the startup snapshot shows.
pub fn log_filters(rust_log: Option<String>) -> String {
    match rust_log {
        Some(filters) if !filters.trim().is_empty() => filters,
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}
