use std::env;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

const PRIMARY_KEY_VAR: &str = "OPENAI_API_KEY";
const SECONDARY_KEY_VAR: &str = "OPENROUTER_API_KEY";
const BASE_URL_VAR: &str = "OPENAI_API_BASE";
const MODEL_VAR: &str = "JUDGECRAFT_MODEL";

/// Everything the direct-API tier needs, resolved once at judge construction
/// and threaded down as a parameter. No env reads happen deeper in.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Missing credential is the designed signal to degrade to heuristics.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::resolve(
            env_var(PRIMARY_KEY_VAR),
            env_var(SECONDARY_KEY_VAR),
            env_var(BASE_URL_VAR),
            env_var(MODEL_VAR),
        )
    }

    fn resolve(
        primary_key: Option<String>,
        secondary_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Self {
        Self {
            api_key: primary_key.or(secondary_key),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Config with no credential and default endpoint/model.
    pub fn unconfigured() -> Self {
        Self::resolve(None, None, None, None)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Set-but-empty variables count as unset, matching shell usage where an
/// export can be cleared with `VAR=`.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_credential_wins() {
        let config = ApiConfig::resolve(
            Some("sk-primary".to_string()),
            Some("sk-secondary".to_string()),
            None,
            None,
        );
        assert_eq!(config.api_key.as_deref(), Some("sk-primary"));
    }

    #[test]
    fn secondary_credential_is_the_fallback() {
        let config = ApiConfig::resolve(None, Some("sk-secondary".to_string()), None, None);
        assert_eq!(config.api_key.as_deref(), Some("sk-secondary"));
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ApiConfig::unconfigured();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn overrides_replace_the_defaults() {
        let config = ApiConfig::resolve(
            None,
            None,
            Some("http://localhost:8080/v1".to_string()),
            Some("qwen3-0.5b".to_string()),
        );
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "qwen3-0.5b");
    }
}
