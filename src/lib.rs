pub mod attempt;
pub mod backend;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

pub use views::{page, render, titled};

use axum::{middleware, Router};

use crate::backend::BackendClient;
use crate::models::QuizRecord;
use crate::rejections::{AppError, ResultExt};
use crate::store::{AttemptStore, RecordCache};

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub attempts: AttemptStore,
    pub records: RecordCache,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            attempts: AttemptStore::default(),
            records: RecordCache::default(),
        }
    }

    /// Resolve a record by id: from the cache if it was fetched before, with
    /// a `GET /quiz/{id}` round trip as fallback.
    pub async fn record(&self, id: i64) -> Result<QuizRecord, AppError> {
        if let Some(record) = self.records.get(id) {
            return Ok(record);
        }

        let generation = self.records.generation();
        let record = match self.backend.quiz(id).await {
            Err(e) if e.is_not_found() => {
                tracing::warn!("quiz {id} not found on backend");
                return Err(AppError::NotFound("quiz not found"));
            }
            other => other.reject("could not fetch quiz")?,
        };
        self.records.store(generation, [record.clone()]);
        Ok(record)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::generate::routes())
        .merge(handlers::history::routes())
        .merge(handlers::attempt::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
