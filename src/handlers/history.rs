use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::IsHtmx,
    names,
    rejections::AppError,
    views, AppState,
};

use crate::views::history as history_views;
use crate::views::quiz::{self as quiz_views, RevealState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::HISTORY_URL, get(history))
        .route("/history/{id}/details", get(quiz_details))
        .route("/history/{id}/review/{idx}", get(reveal_review_cell))
}

/// The history tab body: fetch, cache, render. Shared with the attempt
/// abandon handler, which lands the user back here.
pub(crate) async fn history_body(state: &AppState) -> Markup {
    let generation = state.records.generation();
    match state.backend.history().await {
        Ok(records) => {
            state.records.store(generation, records.iter().cloned());
            history_views::history_page(&records)
        }
        Err(e) => {
            tracing::warn!("could not fetch history: {e}");
            history_views::history_error(e.user_message(names::HISTORY_ERROR_MESSAGE))
        }
    }
}

async fn history(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    let body = history_body(&state).await;
    views::render(is_htmx, "Past Quizzes", body)
}

/// Non-destructive details overlay. Rendered fresh from the record on every
/// open, so an open/close/reopen cycle produces identical content.
async fn quiz_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Markup, AppError> {
    let record = state.record(id).await?;
    Ok(history_views::details_modal(&record))
}

#[derive(Deserialize)]
struct RevealQuery {
    /// Option index the user guessed; absent for the no-guess reveal.
    selected: Option<usize>,
}

/// Swap one hidden review cell for its revealed rendering. Only the
/// addressed cell is returned; sibling cells are untouched.
async fn reveal_review_cell(
    State(state): State<AppState>,
    Path((id, question_idx)): Path<(i64, usize)>,
    Query(query): Query<RevealQuery>,
) -> Result<Markup, AppError> {
    let record = state.record(id).await?;
    let question = record
        .quiz
        .get(question_idx)
        .ok_or(AppError::NotFound("no such question"))?;

    if let Some(selected) = query.selected {
        if selected >= question.options.len() {
            return Err(AppError::Input("unknown option"));
        }
    }

    Ok(quiz_views::review_cell(
        record.id,
        question_idx,
        question,
        RevealState::Revealed {
            selected: query.selected,
        },
    ))
}
