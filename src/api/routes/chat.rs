use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info, warn};

use crate::api::models::{ChatRequest, ChatResponse};
use crate::api::AppState;
use crate::errors::RelayError;
use crate::quiz::{extract_question, transform_request};

/// Relay endpoint: validate, rewrite the prompt, call upstream, then
/// normalize the first choice into the labeled question block. Any
/// failure terminates the request; there is no partial result.
pub async fn relay_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, RelayError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "Failed to parse request body");
        RelayError::InvalidRequest(e.body_text())
    })?;

    if request.messages.is_empty() {
        warn!("Rejecting request with no messages");
        return Err(RelayError::InvalidRequest("no messages in request".into()));
    }

    let outbound = transform_request(&request, &state.default_model);
    info!(model = %outbound.model, "Forwarding request upstream");

    let mut response = state.upstream.chat(&outbound).await.inspect_err(|e| {
        warn!(error = %e, "Upstream call failed");
    })?;

    let content = match response.choices.first() {
        Some(choice) => choice.message.content.clone(),
        None => {
            return Err(RelayError::MalformedUpstreamResponse(
                "no choices in upstream response".into(),
            ))
        }
    };
    debug!(content = %content, "Upstream content");

    let question = extract_question(&content).inspect_err(|_| {
        warn!("Upstream content did not match the expected question format");
    })?;
    response.choices[0].message.content = question.render();

    Ok(Json(response))
}
