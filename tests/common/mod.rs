#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use healthbot_backend::services::anthropic::{ContentBlock, MessageRequest, MessageResponse};
use healthbot_backend::services::model_client::{ModelClient, ModelError};

/// In-process stand-in for the Anthropic API. Returns a canned outcome and
/// remembers what it was asked.
pub struct StubModel {
    outcome: Result<MessageResponse, ModelError>,
    calls: AtomicUsize,
    last_request: Mutex<Option<MessageRequest>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self::with_response(MessageResponse {
            content: vec![ContentBlock::Text { text: text.to_string() }],
            ..Default::default()
        })
    }

    pub fn with_response(response: MessageResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(err: ModelError) -> Self {
        Self {
            outcome: Err(err),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<MessageRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for StubModel {
    async fn create_message(&self, request: &MessageRequest) -> Result<MessageResponse, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.outcome.clone()
    }
}
