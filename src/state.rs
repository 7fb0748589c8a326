// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::anthropic::AnthropicClient;
use crate::services::model_client::ModelClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model_client: Arc<dyn ModelClient>,
    pub model: String,
}

impl AppState {
    pub fn new(model_client: Arc<dyn ModelClient>, model: impl Into<String>) -> Self {
        Self {
            model_client,
            model: model.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let client = AnthropicClient::new(
            settings.anthropic.api_key.clone(),
            &settings.anthropic.base_url,
        )?;
        Ok(Self::new(Arc::new(client), settings.anthropic.model.clone()))
    }
}
