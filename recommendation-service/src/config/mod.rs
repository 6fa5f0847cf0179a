use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_SERVICE_NAME: &str = "recommendation-service";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    /// OTLP/gRPC collector; spans are not exported when unset.
    pub otlp_endpoint: Option<String>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }
}

impl RecommendationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let otlp_endpoint = if is_prod {
            Some(get_env("OTLP_ENDPOINT", None, is_prod)?)
        } else {
            env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty())
        };

        Ok(RecommendationConfig {
            common: common_config,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            otlp_endpoint,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_to_default_outside_prod() {
        let value = get_env("RECOMMENDATION_TEST_UNSET_KEY", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_requires_key_in_prod() {
        let err = get_env("RECOMMENDATION_TEST_UNSET_KEY", Some("fallback"), true).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn get_env_without_default_is_an_error() {
        assert!(get_env("RECOMMENDATION_TEST_UNSET_KEY", None, false).is_err());
    }
}
