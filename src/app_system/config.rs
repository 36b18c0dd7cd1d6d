use std::time::Duration;

use crate::error::ConfigError;

const BASE_URL_VAR: &str = "STUDENT_API_BASE_URL";
const TIMEOUT_VAR: &str = "STUDENT_API_TIMEOUT_SECS";
const COURSES_DELAY_VAR: &str = "STUDENT_COURSES_DELAY_MS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_COURSES_DELAY_MS: u64 = 500;

/// Where the backend lives and how to talk to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Artificial latency before the course lookup is dispatched.
    pub courses_delay: Duration,
}

impl ApiConfig {
    /// Reads the configuration from the process environment, after loading a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;

        let timeout = parse_u64(&lookup, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        let courses_delay = parse_u64(&lookup, COURSES_DELAY_VAR, DEFAULT_COURSES_DELAY_MS)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout),
            courses_delay: Duration::from_millis(courses_delay),
        })
    }
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
