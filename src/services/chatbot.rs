use serde_json::Value;
use tracing::debug;

use super::anthropic::{ContentBlock, Message, MessageRequest, MessageResponse, MessageRole};
use super::model_client::ModelClient;
use crate::error::AppError;
use crate::message::ChatRequest;

pub const MAX_TOKENS: u32 = 1024;

pub const SYSTEM_PROMPT: &str = r#"You are a helpful and empathetic healthcare assistant created by Hazy.

RESPONSE STYLE:
- ALWAYS mention "I'm created by Hazy" in your FIRST sentence of every response
- Keep all responses SHORT and CONCISE (1 sentence maximum)
- Be direct and to the point

Your role is to:
- Provide general health information and wellness advice
- Answer questions about common health conditions and symptoms
- Offer guidance on healthy lifestyle choices
- Suggest when to seek professional medical attention

IMPORTANT DISCLAIMERS:
- You are NOT a replacement for professional medical advice, diagnosis, or treatment
- Always recommend consulting with qualified healthcare providers for specific medical concerns
- Do not provide specific diagnoses or prescribe medications
- In case of emergencies, always advise calling emergency services

Be compassionate, clear, and informative while maintaining appropriate boundaries."#;

/// Accepts a body only if `message` is a string with something besides
/// whitespace in it. The returned message is untrimmed.
pub fn validate_message(body: &Value) -> Result<ChatRequest, AppError> {
    match body.get("message") {
        Some(Value::String(message)) if !message.trim_matches(is_js_whitespace).is_empty() => {
            Ok(ChatRequest {
                message: message.clone(),
            })
        }
        _ => Err(AppError::Validation),
    }
}

// Same set as ECMAScript `String.prototype.trim`: Unicode White_Space plus
// the BOM, minus NEL.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

pub fn build_request(model: &str, message: &str) -> MessageRequest {
    MessageRequest {
        model: model.to_string(),
        max_tokens: MAX_TOKENS,
        system: SYSTEM_PROMPT.to_string(),
        messages: vec![Message {
            role: MessageRole::User,
            content: message.to_string(),
        }],
    }
}

/// Text of the first content block. A first block of any other kind, or no
/// block at all, yields an empty reply rather than an error.
pub fn extract_reply(response: &MessageResponse) -> String {
    match response.content.first() {
        Some(ContentBlock::Text { text }) => text.clone(),
        _ => String::new(),
    }
}

pub async fn generate_reply(
    client: &dyn ModelClient,
    model: &str,
    request: &ChatRequest,
) -> Result<String, AppError> {
    debug!(model, message_len = request.message.len(), "sending message to model");

    let response = client
        .create_message(&build_request(model, &request.message))
        .await?;

    Ok(extract_reply(&response))
}
