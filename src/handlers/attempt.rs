use axum::{
    extract::{Path, Query, State},
    routing::post,
    Router,
};
use maud::Markup;
use serde::Deserialize;
use ulid::Ulid;

use crate::{attempt::Attempt, rejections::AppError, views, AppState};

use crate::views::quiz::attempt_page;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/history/{id}/take", post(take_quiz))
        .route("/attempt/{token}/select/{idx}", post(select_option))
        .route("/attempt/{token}/submit", post(submit_attempt))
        .route("/attempt/{token}/retake", post(retake_attempt))
        .route("/attempt/{token}/abandon", post(abandon_attempt))
}

/// Start a brand-new attempt over the record's questions. Retaking a quiz
/// goes through here again, so every attempt starts from a clean state.
async fn take_quiz(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Markup, AppError> {
    let record = state.record(id).await?;
    let title = record.title.clone();
    let attempt = Attempt::new(record);
    let token = state.attempts.insert(attempt);
    tracing::debug!("started attempt {token} for quiz {id}");

    let body = state
        .attempts
        .with(token, |attempt| attempt_page(token, attempt))
        .ok_or(AppError::Internal("attempt vanished on creation"))?;
    Ok(views::titled(&title, body))
}

#[derive(Deserialize)]
struct SelectQuery {
    option: usize,
}

/// Record one option choice and re-render the attempt. A no-op once the
/// attempt is graded; the attempt state machine enforces that.
async fn select_option(
    State(state): State<AppState>,
    Path((token, question_idx)): Path<(Ulid, usize)>,
    Query(query): Query<SelectQuery>,
) -> Result<Markup, AppError> {
    state
        .attempts
        .with(token, |attempt| {
            let option = attempt
                .record()
                .quiz
                .get(question_idx)
                .and_then(|q| q.options.get(query.option))
                .cloned()
                .ok_or(AppError::Input("unknown option"))?;
            attempt.select(question_idx, option);
            Ok(attempt_page(token, attempt))
        })
        .ok_or(AppError::NotFound("no such attempt"))?
}

/// Grade the attempt. The submit control is disabled until every question
/// has a selection; a forced request before that is a no-op re-render.
async fn submit_attempt(
    State(state): State<AppState>,
    Path(token): Path<Ulid>,
) -> Result<Markup, AppError> {
    state
        .attempts
        .with(token, |attempt| {
            if attempt.submit() {
                tracing::info!(
                    "attempt {token} graded: {}/{}",
                    attempt.score(),
                    attempt.total()
                );
            }
            attempt_page(token, attempt)
        })
        .ok_or(AppError::NotFound("no such attempt"))
}

/// Drop the finished attempt and start a fresh one over the same record.
/// Going through the live attempt rather than the record id means the old
/// entry cannot outlive its replacement.
async fn retake_attempt(
    State(state): State<AppState>,
    Path(token): Path<Ulid>,
) -> Result<Markup, AppError> {
    let record = state
        .attempts
        .remove(token)
        .ok_or(AppError::NotFound("no such attempt"))?
        .into_record();
    let title = record.title.clone();
    let new_token = state.attempts.insert(Attempt::new(record));
    tracing::debug!("attempt {token} retaken as {new_token}");

    let body = state
        .attempts
        .with(new_token, |attempt| attempt_page(new_token, attempt))
        .ok_or(AppError::Internal("attempt vanished on creation"))?;
    Ok(views::titled(&title, body))
}

/// Navigate back to history, discarding the attempt.
async fn abandon_attempt(
    State(state): State<AppState>,
    Path(token): Path<Ulid>,
) -> Markup {
    state.attempts.remove(token);
    let body = super::history::history_body(&state).await;
    views::titled("Past Quizzes", body)
}
