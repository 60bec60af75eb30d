use std::time::Duration;

use anyhow::Context;
use hypr_api_env::{OpenAIEnv, filter_empty};
use hypr_solver_proxy::{ChatConfig, ModelSelection};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Deserialize)]
pub struct Env {
    #[serde(default, deserialize_with = "filter_empty")]
    pub port: Option<String>,
    #[serde(default, deserialize_with = "filter_empty")]
    pub sentry_dsn: Option<String>,
    #[serde(flatten)]
    pub openai: OpenAIEnv,
}

impl Env {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn port(&self) -> anyhow::Result<u16> {
        match &self.port {
            None => Ok(DEFAULT_PORT),
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT: {port:?}")),
        }
    }

    pub fn chat_config(&self) -> ChatConfig {
        let openai = &self.openai;

        let mut models = ModelSelection::default();
        if let Some(model) = &openai.openai_text_model {
            models = models.with_text_model(model);
        }
        if let Some(model) = &openai.openai_vision_model {
            models = models.with_vision_model(model);
        }

        let mut config = ChatConfig::new(&openai.openai_api_key)
            .with_models(models)
            .with_timeout(Duration::from_secs(openai.openai_timeout_secs));
        if let Some(api_base) = &openai.openai_api_base {
            config = config.with_api_base(api_base);
        }
        config
    }
}
