use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;
use tracing::debug;

use crate::{
    error::AppError,
    message::ChatResponse,
    services::chatbot::{generate_reply, validate_message},
    state::SharedState,
};

/// Request body as loose JSON, accepting `application/json` and
/// `application/x-www-form-urlencoded`. Anything unreadable becomes
/// `Value::Null` so validation reports it like a missing message.
pub struct ChatBody(pub Value);

impl<S> FromRequest<S> for ChatBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(fields)) => Value::Object(
                    fields
                        .into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect(),
                ),
                Err(rejection) => {
                    debug!(%rejection, "unreadable form body");
                    Value::Null
                }
            }
        } else {
            match Json::<Value>::from_request(req, state).await {
                Ok(Json(value)) => value,
                Err(rejection) => {
                    debug!(%rejection, "unreadable json body");
                    Value::Null
                }
            }
        };

        Ok(Self(body))
    }
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    ChatBody(payload): ChatBody,
) -> Result<Json<ChatResponse>, AppError> {
    let request = validate_message(&payload)?;

    let reply = generate_reply(state.model_client.as_ref(), &state.model, &request).await?;

    Ok(Json(ChatResponse {
        question: request.message,
        response: reply,
    }))
}
