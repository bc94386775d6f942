use secrecy::Secret;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Token ceiling for a single completion.
const DEFAULT_MAX_TOKENS: u32 = 50;

/// Upper bound on any outbound HTTP call.
const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 30;

const DEFAULT_MAKE_WEBHOOK_URL: &str = "https://hook.us1.make.com/7v71i695pgsoeu5p3458y6255dyrh4r6";
const DEFAULT_AIRTABLE_URL: &str = "https://api.airtable.com/v0/appK1JMhzmZ4YkUGv/tblLMxqRVLEuxuxYG";

#[derive(Debug, Clone)]
pub struct PropertyConfig {
    pub common: core_config::Config,
    pub catalog: CatalogConfig,
    pub openai: OpenAiConfig,
    pub sinks: SinkConfig,
    pub http: OutboundConfig,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// JSON file holding the property records.
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Empty outside production means "use the mock provider".
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub make_webhook_url: String,
    pub airtable_url: String,
    pub airtable_api_key: Secret<String>,
}

#[derive(Debug, Clone)]
pub struct OutboundConfig {
    pub timeout: Duration,
}

impl PropertyConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_production();

        Ok(PropertyConfig {
            common: common_config,
            catalog: CatalogConfig {
                path: PathBuf::from(get_env("CATALOG_PATH", Some("properties.json"), is_prod)?),
            },
            openai: OpenAiConfig {
                api_key: Secret::new(get_env("OPENAI_API_KEY", Some(""), is_prod)?),
                model: get_env("OPENAI_MODEL", Some("gpt-4"), is_prod)?,
                base_url: get_env(
                    "OPENAI_BASE_URL",
                    Some("https://api.openai.com/v1"),
                    is_prod,
                )?,
                max_tokens: parse_setting(
                    "OPENAI_MAX_TOKENS",
                    &get_env(
                        "OPENAI_MAX_TOKENS",
                        Some(&DEFAULT_MAX_TOKENS.to_string()),
                        is_prod,
                    )?,
                )?,
            },
            sinks: SinkConfig {
                make_webhook_url: get_env(
                    "MAKE_WEBHOOK_URL",
                    Some(DEFAULT_MAKE_WEBHOOK_URL),
                    is_prod,
                )?,
                airtable_url: get_env("AIRTABLE_URL", Some(DEFAULT_AIRTABLE_URL), is_prod)?,
                airtable_api_key: Secret::new(get_env("AIRTABLE_API_KEY", Some(""), is_prod)?),
            },
            http: OutboundConfig {
                timeout: outbound_timeout(&get_env(
                    "OUTBOUND_TIMEOUT_SECS",
                    Some(&DEFAULT_OUTBOUND_TIMEOUT_SECS.to_string()),
                    is_prod,
                )?)?,
            },
        })
    }
}

/// Parse a numeric setting, naming the key on failure.
fn parse_setting<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("{} has invalid value {:?}: {}", key, raw, e))
    })
}

fn outbound_timeout(raw: &str) -> Result<Duration, AppError> {
    match parse_setting::<u64>("OUTBOUND_TIMEOUT_SECS", raw)? {
        0 => Err(AppError::ConfigError(anyhow::anyhow!(
            "OUTBOUND_TIMEOUT_SECS must be greater than zero"
        ))),
        secs => Ok(Duration::from_secs(secs)),
    }
}
