use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::{best_match, build_prompt, MATCH_CUTOFF};
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct QuestionRequest {
    /// Any text, including empty or very long; it is never interpreted.
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// Match, build the prompt and generate - implementation.
///
/// Matching and prompt building cannot fail; only the completion call can.
#[tracing::instrument(skip(state, question), fields(question_len = question.len()))]
pub async fn answer_question(state: &AppState, question: &str) -> Result<String, AppError> {
    let hit = best_match(question, &state.catalog, MATCH_CUTOFF);

    match &hit {
        Some(m) => tracing::info!(faq_index = m.index, score = m.score, "Matched FAQ entry"),
        None => tracing::info!("No FAQ entry above cutoff"),
    }

    let prompt = build_prompt(question, hit.map(|m| m.answer()));

    let generated = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Completion request failed");
        AppError::from(e)
    })?;

    tracing::debug!(
        input_tokens = generated.input_tokens,
        output_tokens = generated.output_tokens,
        finish_reason = ?generated.finish_reason,
        "Completion received"
    );

    Ok(generated.text)
}

#[tracing::instrument(skip_all)]
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<AskResponse>, AppError> {
    request.validate()?;

    let response = answer_question(&state, &request.question).await?;

    Ok(Json(AskResponse { response }))
}
