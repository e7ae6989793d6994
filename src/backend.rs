//! HTTP client for the quiz-generation backend. All domain logic (scraping,
//! summarization, question generation, persistence) lives behind these
//! endpoints; this layer only moves JSON.

use serde::{Deserialize, Serialize};

use crate::models::QuizRecord;

#[derive(Serialize)]
struct GenerateQuizRequest<'a> {
    url: &'a str,
    force_refresh: bool,
}

/// Error bodies carry an optional `detail` string meant for the user.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// The flat error taxonomy of this layer: a request either failed in
/// transport or came back non-2xx, with or without a usable message.
#[derive(Debug)]
pub enum BackendError {
    Transport(reqwest::Error),
    Api {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
}

impl BackendError {
    /// The one string shown to the user: the server's `detail` verbatim if
    /// present, otherwise the caller's fallback for its own context.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            BackendError::Api {
                detail: Some(detail),
                ..
            } => detail,
            _ => fallback,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BackendError::Api { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Transport(e) => write!(f, "backend unreachable: {e}"),
            BackendError::Api { status, detail } => match detail {
                Some(detail) => write!(f, "backend returned {status}: {detail}"),
                None => write!(f, "backend returned {status}"),
            },
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        BackendError::Transport(e)
    }
}

/// Thin client over the backend's three endpoints. Cheap to clone; the
/// underlying reqwest client is shared.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// `POST /generate-quiz`: scrape the article and build a quiz, or return
    /// the cached one unless `force_refresh` asks the backend to bypass it.
    pub async fn generate_quiz(
        &self,
        url: &str,
        force_refresh: bool,
    ) -> Result<QuizRecord, BackendError> {
        let response = self
            .client
            .post(format!("{}/generate-quiz", self.base_url))
            .json(&GenerateQuizRequest { url, force_refresh })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /history`: all previously generated quizzes, in the backend's
    /// display order.
    pub async fn history(&self) -> Result<Vec<QuizRecord>, BackendError> {
        let response = self
            .client
            .get(format!("{}/history", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /quiz/{id}`: one record by id.
    pub async fn quiz(&self, id: i64) -> Result<QuizRecord, BackendError> {
        let response = self
            .client
            .get(format!("{}/quiz/{id}", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(BackendError::Api { status, detail })
    }
}
