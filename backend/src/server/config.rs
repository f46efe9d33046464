//! Environment-driven application configuration.
//!
//! Everything is read through [`mockable::Env`] so tests inject a `MockEnv`
//! instead of mutating process state.

use std::fmt;
use std::time::Duration;

use mockable::Env;
use tracing::warn;
use url::Url;

use profile_aggregator::outbound::exchange_rate::DEFAULT_EXCHANGE_RATE_URL;
use profile_aggregator::outbound::news_api::DEFAULT_NEWS_API_URL;
use profile_aggregator::outbound::random_user::DEFAULT_RANDOM_USER_URL;
use profile_aggregator::outbound::rest_countries::DEFAULT_REST_COUNTRIES_URL;

const PORT_ENV: &str = "PORT";
const BIND_HOST_ENV: &str = "BIND_HOST";
const EXCHANGE_RATE_KEY_ENV: &str = "EXCHANGE_RATE_API_KEY";
const NEWS_KEY_ENV: &str = "NEWS_API_KEY";
const TIMEOUT_ENV: &str = "UPSTREAM_TIMEOUT_SECS";
const RANDOM_USER_URL_ENV: &str = "RANDOM_USER_URL";
const REST_COUNTRIES_URL_ENV: &str = "REST_COUNTRIES_URL";
const EXCHANGE_RATE_URL_ENV: &str = "EXCHANGE_RATE_URL";
const NEWS_API_URL_ENV: &str = "NEWS_API_URL";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;

/// Errors raised while reading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// An endpoint override is not a valid absolute URL.
    #[error("invalid URL for {name}='{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Upstream credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential, treating blank values as unset.
    pub fn from_env_value(value: Option<String>) -> Option<Self> {
        value
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Base URLs of the four upstream services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    pub random_user: Url,
    pub rest_countries: Url,
    pub exchange_rate: Url,
    pub news_api: Url,
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub exchange_rate_key: Option<ApiKey>,
    pub news_api_key: Option<ApiKey>,
    pub upstream_timeout: Duration,
    pub endpoints: UpstreamEndpoints,
}

impl AppConfig {
    /// Read configuration from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when an endpoint override does not
    /// parse. Invalid ports and timeouts fall back to defaults with a warning.
    pub fn from_env<E: Env>(env: &E) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_host: env
                .string(BIND_HOST_ENV)
                .filter(|host| !host.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned()),
            port: port_from_env(env),
            exchange_rate_key: ApiKey::from_env_value(env.string(EXCHANGE_RATE_KEY_ENV)),
            news_api_key: ApiKey::from_env_value(env.string(NEWS_KEY_ENV)),
            upstream_timeout: timeout_from_env(env),
            endpoints: UpstreamEndpoints {
                random_user: url_from_env(env, RANDOM_USER_URL_ENV, DEFAULT_RANDOM_USER_URL)?,
                rest_countries: url_from_env(
                    env,
                    REST_COUNTRIES_URL_ENV,
                    DEFAULT_REST_COUNTRIES_URL,
                )?,
                exchange_rate: url_from_env(
                    env,
                    EXCHANGE_RATE_URL_ENV,
                    DEFAULT_EXCHANGE_RATE_URL,
                )?,
                news_api: url_from_env(env, NEWS_API_URL_ENV, DEFAULT_NEWS_API_URL)?,
            },
        })
    }
}

fn port_from_env<E: Env>(env: &E) -> u16 {
    let Some(value) = env.string(PORT_ENV) else {
        return DEFAULT_PORT;
    };
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            warn!(value = %value, default = DEFAULT_PORT, "invalid PORT; using default");
            DEFAULT_PORT
        }
    }
}

fn timeout_from_env<E: Env>(env: &E) -> Duration {
    let secs = match env.string(TIMEOUT_ENV) {
        None => DEFAULT_TIMEOUT_SECS,
        Some(value) => value.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!(
                value = %value,
                default = DEFAULT_TIMEOUT_SECS,
                "invalid UPSTREAM_TIMEOUT_SECS; using default"
            );
            DEFAULT_TIMEOUT_SECS
        }),
    };
    Duration::from_secs(secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
}

fn url_from_env<E: Env>(env: &E, name: &'static str, default: &str) -> Result<Url, ConfigError> {
    let value = env
        .string(name)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_owned());
    Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        name,
        value,
        source,
    })
}
