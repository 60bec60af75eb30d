use std::time::Duration;

use crate::model::ModelSelection;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub api_base: String,
    pub models: ModelSelection,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ChatConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.into(),
            models: ModelSelection::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_models(mut self, models: ModelSelection) -> Self {
        self.models = models;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url() {
        let cases = [
            ("https://api.openai.com/v1", "https://api.openai.com/v1/chat/completions"),
            ("http://127.0.0.1:9000/", "http://127.0.0.1:9000/chat/completions"),
        ];

        for (base, expected) in cases {
            let config = ChatConfig::new("key").with_api_base(base);
            assert_eq!(config.completions_url(), expected, "{base}");
        }
    }

    #[test]
    fn defaults() {
        let config = ChatConfig::new("key");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(config.timeout, Duration::from_secs(120));
    }
}
