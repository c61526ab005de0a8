use std::env;

use crate::error::ApiError;

/// Process-wide, read-only credential configuration. Built once at startup so
/// the unconfigured state is explicit instead of an ambient env lookup at
/// request time.
#[derive(Clone)]
pub struct ApiConfig {
    huggingface_api_key: Option<String>,
    openai_api_key: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let config = Self {
            huggingface_api_key: env::var("HUGGINGFACE_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
        };

        if config.huggingface_api_key.is_none() {
            log::warn!("HUGGINGFACE_API_KEY is not set; /api/classify will fail until configured");
        }
        if config.openai_api_key.is_none() {
            log::warn!("OPENAI_API_KEY is not set; /api/analyze will fail until configured");
        }

        config
    }

    #[cfg(test)]
    pub fn unconfigured() -> Self {
        Self {
            huggingface_api_key: None,
            openai_api_key: None,
        }
    }

    #[cfg(test)]
    pub fn with_keys(huggingface: Option<&str>, openai: Option<&str>) -> Self {
        Self {
            huggingface_api_key: huggingface.map(String::from),
            openai_api_key: openai.map(String::from),
        }
    }

    pub fn huggingface_api_key(&self) -> Result<&str, ApiError> {
        self.huggingface_api_key
            .as_deref()
            .ok_or_else(|| ApiError::Configuration("Hugging Face API key is not configured".into()))
    }

    pub fn openai_api_key(&self) -> Result<&str, ApiError> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| ApiError::Configuration("OpenAI API key is not configured".into()))
    }
}
