//! Process-wide configuration, loaded once at cold start

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use zapgpt_connector_openai::{OpenAiConfig, DEFAULT_API_BASE};

/// Environment variable holding the upstream API key
pub const API_KEY_VAR: &str = "GPT_API_KEY";
/// Prefix for optional overrides, e.g. `ZAPGPT_LOG_LEVEL`
pub const ENV_PREFIX: &str = "ZAPGPT_";
/// Keys that may be overridden through `ZAPGPT_*` variables
const OVERRIDABLE_KEYS: &[&str] = &["api_base", "log_level"];

/// Configuration for the function.
///
/// Model, token cap and timeout are not configurable here; the connector's
/// defaults always apply.
#[derive(Clone, Serialize, Deserialize)]
pub struct LambdaConfig {
    /// Upstream API key; an empty key is sent as-is
    pub gpt_api_key: String,
    /// Upstream API base URL
    pub api_base: String,
    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            gpt_api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl LambdaConfig {
    /// Load configuration from defaults and the process environment
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(LambdaConfig::default()))
            // The key is taken verbatim; Env would coerce "12345" or "true" into non-strings
            .merge(Serialized::default("gpt_api_key", raw_api_key()))
            .merge(Env::prefixed(ENV_PREFIX).only(OVERRIDABLE_KEYS))
    }

    /// Connector configuration derived from this config
    pub fn openai(&self) -> OpenAiConfig {
        OpenAiConfig::new(self.gpt_api_key.clone()).with_api_base(self.api_base.clone())
    }
}

fn raw_api_key() -> String {
    std::env::var_os(API_KEY_VAR)
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl std::fmt::Debug for LambdaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LambdaConfig")
            .field("gpt_api_key_set", &!self.gpt_api_key.is_empty())
            .field("api_base", &self.api_base)
            .field("log_level", &self.log_level)
            .finish()
    }
}
